use std::fmt;

/// Failures reported by the singleton lifecycle.
///
/// The only defined failure is uninitialized access; it is always
/// recoverable — retry with creation requested, or check
/// [`has_instance`](crate::Singleton::has_instance) first. Panics raised by a
/// type's own `init` propagate unchanged and are not wrapped here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingletonError {
    /// The instance was requested without permission to create one and none
    /// exists yet.
    Uninitialized {
        /// Name of the concrete type whose slot was empty.
        type_name: &'static str,
    },
}

impl fmt::Display for SingletonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingletonError::Uninitialized { type_name } => {
                write!(f, "Instance of {type_name} is not initialized yet")
            }
        }
    }
}

impl std::error::Error for SingletonError {}
