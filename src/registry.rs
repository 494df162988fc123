//! Process-wide slot store backing the [`Singleton`](crate::Singleton) trait.
//!
//! Each concrete type gets exactly one slot, keyed by its `TypeId`. A slot is
//! empty until the first successful construction, holds at most one instance,
//! and stays populated until an explicit reset. The store is shared by every
//! singleton type in the process; isolation between types comes from the
//! `TypeId` key, never from a shared field.

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex, RwLock},
};

use crate::RegistryEvent;

/// Global slot store mapping concrete type identity to its cached instance.
///
/// An `RwLock` rather than a `Mutex`: once a slot is populated, every reader
/// takes the shared lock only, so the common already-initialized path never
/// waits behind another reader. Only first creation and reset take the
/// exclusive lock.
static SLOTS: LazyLock<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

// -------------------------------------------------------------------------------------------------
// Tracing callback support
// -------------------------------------------------------------------------------------------------

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` for every singleton
/// lifecycle operation. It must be thread-safe because the registry itself is
/// globally shared.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Holds an optional user-defined tracing callback.
static TRACE_CALLBACK: LazyLock<Mutex<Option<Arc<TraceCallback>>>> =
    LazyLock::new(|| Mutex::new(None));

/// Sets a tracing callback that will be invoked on every singleton lifecycle
/// operation.
///
/// Call `clear_trace_callback` to disable tracing again.
///
/// Events are emitted after the registry's own locks have been released, so a
/// callback may inspect the registry. It must still not hold locks of its own
/// that an `init` body also takes, or the usual deadlock rules apply.
///
/// # Example
/// ```rust
/// use singleton_base::set_trace_callback;
///
/// set_trace_callback(|event| println!("[singleton-trace] {event}"));
/// # singleton_base::clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
    let mut guard = TRACE_CALLBACK.lock().unwrap_or_else(|p| p.into_inner());
    *guard = Some(Arc::new(callback));
}

/// Clears the tracing callback (disables lifecycle tracing).
pub fn clear_trace_callback() {
    let mut guard = TRACE_CALLBACK.lock().unwrap_or_else(|p| p.into_inner());
    *guard = None;
}

/// Convenience wrapper to emit a registry event using the current callback.
fn emit_event(event: &RegistryEvent) {
    // lock poisoning unlikely; if poisoned, keep emitting with recovered lock
    let guard = TRACE_CALLBACK.lock().unwrap_or_else(|p| p.into_inner());
    if let Some(callback) = guard.as_ref() {
        callback(event);
    }
}

// -------------------------------------------------------------------------------------------------
// Slot operations
// -------------------------------------------------------------------------------------------------

/// Reads the slot for `T` under the shared lock. No event is emitted.
///
/// The guard is dropped before the downcast; the slot for `TypeId::of::<T>()`
/// only ever holds an `Arc<T>`, so a failed downcast is treated as an empty
/// slot rather than an error.
fn fetch<T: Send + Sync + 'static>() -> Option<Arc<T>> {
    let slots = SLOTS.read().unwrap_or_else(|p| p.into_inner());
    let entry = slots.get(&TypeId::of::<T>()).cloned();
    drop(slots);

    entry.and_then(|any_arc| any_arc.downcast::<T>().ok())
}

/// Returns the cached instance of `T`, creating it with `make` if the slot is
/// empty.
///
/// Double-checked: the shared-lock fast path returns an existing instance
/// without touching the exclusive lock. On the slow path the exclusive lock
/// is taken and the slot re-checked before `make` runs — the re-check is what
/// guarantees that concurrent first-time callers converge on one instance and
/// that `make` executes at most once per populated slot. Whichever caller
/// wins the exclusive lock supplies the surviving arguments; every later
/// caller's arguments are discarded unused with the rest of its `make`
/// closure.
///
/// A panic inside `make` inserts nothing: the slot stays empty and the panic
/// propagates to the caller. The poisoned lock is recovered on the next
/// access.
pub(crate) fn get_or_create<T: Send + Sync + 'static>(make: impl FnOnce() -> T) -> Arc<T> {
    let type_name = std::any::type_name::<T>();

    if let Some(existing) = fetch::<T>() {
        emit_event(&RegistryEvent::Construct {
            type_name,
            created: false,
        });
        return existing;
    }

    let mut slots = SLOTS.write().unwrap_or_else(|p| p.into_inner());

    // Re-check: another thread may have populated the slot between the
    // shared-lock check and our acquisition of the exclusive lock.
    if let Some(existing) = slots
        .get(&TypeId::of::<T>())
        .cloned()
        .and_then(|any_arc| any_arc.downcast::<T>().ok())
    {
        drop(slots);
        emit_event(&RegistryEvent::Construct {
            type_name,
            created: false,
        });
        return existing;
    }

    let instance = Arc::new(make());
    slots.insert(TypeId::of::<T>(), instance.clone());
    drop(slots);

    emit_event(&RegistryEvent::Construct {
        type_name,
        created: true,
    });

    instance
}

/// Returns the cached instance of `T` without any permission to create one.
pub(crate) fn get<T: Send + Sync + 'static>() -> Option<Arc<T>> {
    let found = fetch::<T>();

    emit_event(&RegistryEvent::Get {
        type_name: std::any::type_name::<T>(),
        found: found.is_some(),
    });

    found
}

/// Checks whether the slot for `T` is currently populated. No side effects.
pub(crate) fn contains<T: Send + Sync + 'static>() -> bool {
    let populated = SLOTS
        .read()
        .unwrap_or_else(|p| p.into_inner())
        .contains_key(&TypeId::of::<T>());

    emit_event(&RegistryEvent::Has {
        type_name: std::any::type_name::<T>(),
        populated,
    });

    populated
}

/// Empties the slot for `T`. Resetting an already-empty slot is a no-op.
///
/// The removed `Arc` is dropped after the exclusive lock is released, so an
/// instance with a heavy `Drop` impl never runs user code under the registry
/// lock.
pub(crate) fn reset<T: Send + Sync + 'static>() {
    let removed = SLOTS
        .write()
        .unwrap_or_else(|p| p.into_inner())
        .remove(&TypeId::of::<T>());

    emit_event(&RegistryEvent::Reset {
        type_name: std::any::type_name::<T>(),
        was_populated: removed.is_some(),
    });
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
