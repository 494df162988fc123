//! The [`Singleton`] base trait.
//!
//! Deriving from the abstraction means implementing this trait: the type
//! supplies its normal construction logic in [`init`](Singleton::init), and
//! the provided methods route every construction attempt through the
//! process-wide registry check. Each implementor keeps its own slot, keyed by
//! its exact concrete type, so independent singleton types never interfere
//! with each other.

use std::sync::Arc;

use crate::{registry, SingletonError};

/// Turns the implementing type into a lazily-initialized, thread-safe
/// singleton with typed access.
///
/// Only [`Args`](Singleton::Args) and [`init`](Singleton::init) have to be
/// written by hand (or generated with [`singleton!`](crate::singleton)); the
/// lifecycle methods are provided.
///
/// # Examples
///
/// ```rust
/// use singleton_base::Singleton;
/// use std::sync::Arc;
///
/// struct Settings {
///     verbosity: u8,
/// }
///
/// impl Singleton for Settings {
///     type Args = u8;
///
///     fn init(verbosity: u8) -> Self {
///         Settings { verbosity }
///     }
/// }
///
/// let a = Settings::construct(3);
/// let b = Settings::construct(9); // arguments discarded, slot already populated
///
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(b.verbosity, 3);
/// # Settings::reset_instance();
/// ```
///
/// # Thread safety
///
/// All methods are safe to call concurrently from any number of threads.
/// Concurrent first-time creation converges on a single instance; whichever
/// caller wins the registry's exclusive lock supplies the arguments the
/// instance is built from. The registry guards only slot transitions — the
/// instance's own interior thread-safety is the implementor's business.
pub trait Singleton: Sized + Send + Sync + 'static {
    /// Arguments consumed by [`init`](Singleton::init) on first construction.
    ///
    /// Use `()` for argument-less types, a tuple or a dedicated struct for
    /// anything richer.
    type Args;

    /// The type's normal construction logic.
    ///
    /// Runs at most once per populated slot; construction attempts against an
    /// already-populated slot never reach it. A panic here propagates to the
    /// caller and caches nothing.
    ///
    /// Must not call back into this type's own lifecycle methods — `init`
    /// runs while the registry's exclusive lock is held, so reentry
    /// deadlocks.
    fn init(args: Self::Args) -> Self;

    /// Builds the singleton instance, or returns the existing one.
    ///
    /// This is the designated construction entry point: if the slot is empty,
    /// `args` are fed to [`init`](Singleton::init) and the result is cached;
    /// if an instance already exists, `args` are **silently discarded** and
    /// the existing instance is returned unchanged. Callers must not rely on
    /// arguments taking effect on anything but the first successful
    /// construction.
    fn construct(args: Self::Args) -> Arc<Self> {
        registry::get_or_create(|| Self::init(args))
    }

    /// Explicit accessor, the contract-preferred entry point.
    ///
    /// - If an instance exists it is returned; `init` is ignored.
    /// - `Some(args)` requests creation: an empty slot is populated exactly
    ///   as [`construct`](Singleton::construct) would.
    /// - `None` denies creation: an empty slot yields
    ///   [`SingletonError::Uninitialized`] naming this type.
    ///
    /// # Errors
    ///
    /// [`SingletonError::Uninitialized`] if no instance exists and creation
    /// was not requested.
    fn get_instance(init: Option<Self::Args>) -> Result<Arc<Self>, SingletonError> {
        if let Some(existing) = registry::get::<Self>() {
            return Ok(existing);
        }

        match init {
            Some(args) => Ok(registry::get_or_create(|| Self::init(args))),
            None => Err(SingletonError::Uninitialized {
                type_name: std::any::type_name::<Self>(),
            }),
        }
    }

    /// Returns whether this type's slot is currently populated.
    ///
    /// No side effects; safe to call anytime, including before the first
    /// creation.
    fn has_instance() -> bool {
        registry::contains::<Self>()
    }

    /// Empties this type's slot.
    ///
    /// Idempotent: resetting an already-empty slot is a no-op. After a reset,
    /// [`has_instance`](Singleton::has_instance) reports `false` and the next
    /// creation produces a genuinely new instance with a distinct identity.
    /// Previously handed-out `Arc`s stay valid; they just no longer refer to
    /// the canonical instance.
    fn reset_instance() {
        registry::reset::<Self>();
    }
}
