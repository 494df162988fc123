//! # Singleton Base
//!
//! A base abstraction that turns any type into a lazily-initialized,
//! thread-safe singleton while keeping static type information: callers
//! always get `Arc<ConcreteType>` back, never a type-erased handle.
//!
//! Each implementing type owns exactly one slot in a process-wide registry,
//! keyed by its concrete type identity. The slot is created lazily with
//! double-checked locking, can be inspected, and can be explicitly reset.
//!
//! ## Quick Start
//!
//! ```rust
//! use singleton_base::{singleton, Singleton};
//!
//! struct Config {
//!     port: u16,
//! }
//!
//! singleton!(Config, u16, |port| Config { port });
//!
//! // First construction populates the slot.
//! let config = Config::construct(8080);
//! assert_eq!(config.port, 8080);
//!
//! // Later constructions return the same instance; arguments are discarded.
//! let again = Config::construct(9999);
//! assert_eq!(again.port, 8080);
//!
//! // The explicit accessor never creates unless asked to.
//! assert!(Config::get_instance(None).is_ok());
//!
//! Config::reset_instance();
//! assert!(!Config::has_instance());
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: concurrent first-time constructions converge on a
//!   single instance; populated slots are read under a shared lock only
//! - **Type-safe**: every accessor returns the concrete type
//! - **Isolated**: each type has its own slot; unrelated singletons never
//!   interact
//! - **Tracing support**: optional callback system for monitoring lifecycle
//!   operations
//!
//! ## Main Items
//!
//! - [`Singleton`] - the base trait; implement `Args` + `init`, inherit the
//!   lifecycle
//! - [`singleton!`] - implement the trait for a type in one line
//! - [`SingletonError`] - the uninitialized-access error
//! - [`set_trace_callback`] - set up tracing for lifecycle operations

mod macros;
mod registry;
mod registry_event;
mod singleton_error;
mod singleton_trait;

// Re-export the main public API
pub use registry::{clear_trace_callback, set_trace_callback, TraceCallback};
pub use registry_event::RegistryEvent;
pub use singleton_error::SingletonError;
pub use singleton_trait::Singleton;
