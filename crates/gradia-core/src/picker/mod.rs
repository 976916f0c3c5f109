//! The gradient picker: one gradient config with change notifications.
//!
//! Mutating calls take [`EmitOptions`](gradia_common::EmitOptions). Unless
//! `silent` is set, each one publishes its fine-grained events followed by
//! exactly one `Event::Change`. Selection calls only publish
//! `StopSelected`/`StopDeselected`. Calls that fail publish nothing.

mod events;
mod stops;
mod types;
mod value;


pub use types::*;
