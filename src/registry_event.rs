/// Events emitted by the registry during singleton lifecycle operations.
///
/// These events are passed to the tracing callback set via
/// [`set_trace_callback`](crate::set_trace_callback). The `Clone` derive
/// allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use singleton_base::RegistryEvent;
///
/// let event = RegistryEvent::Construct {
///     type_name: "app::Config",
///     created: true,
/// };
/// println!("{:?}", event);
/// ```
#[derive(Debug, Clone)]
pub enum RegistryEvent {
    /// A construction attempt was made.
    Construct {
        /// The concrete type being constructed (e.g., "app::Config")
        type_name: &'static str,
        /// Whether this attempt actually ran the constructor; `false` means
        /// an existing instance was returned and the arguments were discarded
        created: bool,
    },

    /// The instance was requested without creation permission.
    Get {
        /// The type name that was requested
        type_name: &'static str,
        /// Whether a cached instance existed
        found: bool,
    },

    /// A slot existence check was performed.
    Has {
        /// The type name that was checked
        type_name: &'static str,
        /// Whether the slot was populated
        populated: bool,
    },

    /// A slot was reset.
    Reset {
        /// The type name whose slot was emptied
        type_name: &'static str,
        /// Whether the slot actually held an instance before the reset
        was_populated: bool,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Construct { type_name, created } => {
                write!(
                    f,
                    "construct {{ type_name: {}, created: {} }}",
                    type_name, created
                )
            }
            RegistryEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {}, found: {} }}", type_name, found)
            }
            RegistryEvent::Has {
                type_name,
                populated,
            } => {
                write!(
                    f,
                    "has {{ type_name: {}, populated: {} }}",
                    type_name, populated
                )
            }
            RegistryEvent::Reset {
                type_name,
                was_populated,
            } => {
                write!(
                    f,
                    "reset {{ type_name: {}, was_populated: {} }}",
                    type_name, was_populated
                )
            }
        }
    }
}
