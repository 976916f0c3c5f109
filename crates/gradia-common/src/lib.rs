pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, GradiaError, GradientError};
pub use events::{EmitOptions, Event, EventBus, ListenerId};
pub use id::{StopId, StopIdSequence};
pub use types::{format_position, GradientType, Stop};

pub type Result<T> = std::result::Result<T, GradiaError>;
