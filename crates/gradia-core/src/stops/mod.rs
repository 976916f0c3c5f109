//! The stop collection: ordered color stops with exclusive selection.

mod operations;
mod serialize;
mod types;

pub use types::*;
