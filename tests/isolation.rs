//! Integration tests for per-type slot isolation.
//!
//! Each concrete type tracks its own slot; creating, inspecting, or
//! resetting one singleton must never affect another — including a pair
//! where one type embeds the other, the closest Rust rendition of a
//! base/derived singleton pair.

use singleton_base::{singleton, Singleton};
use std::sync::Arc;

#[test]
fn test_sibling_types_do_not_share_a_slot() {
    struct AudioDevice {
        sample_rate: u32,
    }

    struct VideoDevice {
        frame_rate: u32,
    }

    singleton!(AudioDevice, u32, |sample_rate| AudioDevice { sample_rate });
    singleton!(VideoDevice, u32, |frame_rate| VideoDevice { frame_rate });

    let audio = AudioDevice::construct(48_000);
    assert!(AudioDevice::has_instance());
    assert!(!VideoDevice::has_instance());

    let video = VideoDevice::construct(60);
    assert_eq!(audio.sample_rate, 48_000);
    assert_eq!(video.frame_rate, 60);
}

#[test]
fn test_reset_of_one_type_leaves_the_other_alone() {
    #[derive(Default)]
    struct First;

    #[derive(Default)]
    struct Second;

    singleton!(First);
    singleton!(Second);

    let _ = First::construct(());
    let second_before = Second::construct(());

    First::reset_instance();

    assert!(!First::has_instance());
    assert!(Second::has_instance());

    // The untouched slot still holds its original instance.
    let second_after = Second::get_instance(None).unwrap();
    assert!(Arc::ptr_eq(&second_before, &second_after));
}

#[test]
fn test_embedding_pair_tracked_independently() {
    // No implementation inheritance in Rust; a type embedding another
    // singleton type stands in for the derived/base pair. The two must keep
    // independent slots and `has_instance` states.
    #[derive(Default)]
    struct Base {
        label: &'static str,
    }

    struct Derived {
        base: Base,
        extra: u8,
    }

    singleton!(Base);
    singleton!(Derived, u8, |extra| Derived {
        base: Base { label: "embedded" },
        extra,
    });

    let base = Base::get_instance(Some(())).unwrap();
    assert!(Base::has_instance());
    assert!(!Derived::has_instance());

    let derived = Derived::get_instance(Some(5)).unwrap();
    assert!(Base::has_instance());
    assert!(Derived::has_instance());

    // Two distinct instances; the embedded Base is not the Base singleton.
    assert_eq!(base.label, "");
    assert_eq!(derived.base.label, "embedded");
    assert_eq!(derived.extra, 5);

    Derived::reset_instance();
    assert!(Base::has_instance());
    assert!(!Derived::has_instance());
}

#[test]
fn test_same_args_type_still_isolated() {
    // Sharing an Args type must not collapse two singletons into one slot.
    struct Reader(String);
    struct Writer(String);

    singleton!(Reader, String, Reader);
    singleton!(Writer, String, Writer);

    let reader = Reader::construct("ro".to_string());
    let writer = Writer::construct("rw".to_string());

    assert_eq!(reader.0, "ro");
    assert_eq!(writer.0, "rw");
}
