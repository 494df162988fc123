//! Macros for adopting the singleton abstraction.
//!
//! This module provides a simple macro-based approach to make an existing
//! type a thread-safe singleton with zero external dependencies.

/// Implements [`Singleton`](crate::Singleton) for a type with a single macro
/// invocation.
///
/// Two forms are supported:
///
/// - `singleton!(Ty)` — argument-less; `init` delegates to the type's
///   `Default` implementation.
/// - `singleton!(Ty, ArgsTy, constructor)` — the constructor is any
///   expression callable as `Fn(ArgsTy) -> Ty`, usually a closure.
///
/// # Examples
///
/// ```rust
/// use singleton_base::{singleton, Singleton};
///
/// #[derive(Default)]
/// struct Telemetry {
///     enabled: bool,
/// }
///
/// singleton!(Telemetry);
///
/// let t = Telemetry::construct(());
/// assert!(!t.enabled);
/// # Telemetry::reset_instance();
/// ```
///
/// With constructor arguments:
///
/// ```rust
/// use singleton_base::{singleton, Singleton};
///
/// struct Database {
///     url: String,
///     pool_size: u32,
/// }
///
/// singleton!(Database, (String, u32), |(url, pool_size)| Database {
///     url,
///     pool_size,
/// });
///
/// let db = Database::get_instance(Some(("postgres://localhost".to_string(), 8))).unwrap();
/// assert_eq!(db.pool_size, 8);
/// # Database::reset_instance();
/// ```
///
/// # Arguments after the first construction
///
/// As with a hand-written implementation, arguments passed once the slot is
/// populated are silently discarded:
///
/// ```rust
/// use singleton_base::{singleton, Singleton};
/// use std::sync::Arc;
///
/// struct Port(u16);
/// singleton!(Port, u16, Port);
///
/// let a = Port::construct(80);
/// let b = Port::construct(443);
///
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(b.0, 80);
/// # Port::reset_instance();
/// ```
#[macro_export]
macro_rules! singleton {
    ($ty:ty) => {
        impl $crate::Singleton for $ty {
            type Args = ();

            fn init((): ()) -> Self {
                <$ty as ::core::default::Default>::default()
            }
        }
    };
    ($ty:ty, $args:ty, $ctor:expr) => {
        impl $crate::Singleton for $ty {
            type Args = $args;

            fn init(args: $args) -> Self {
                ($ctor)(args)
            }
        }
    };
}
