//! Gradient string codec.
//!
//! Encoding renders `<type>-gradient(<direction>, <color list>)` and its
//! vendor-prefixed variants. Decoding is deliberately tolerant: it mirrors
//! how gradient strings are read back from styling engines, including
//! prefixed forms such as `-webkit-radial-gradient(...)`.

mod format;
mod number;
mod parse;
mod split;


pub use format::{format, prefixed_variants, VENDOR_PREFIXES};
pub use number::parse_float_prefix;
pub use parse::{decode, parse, parse_strict, DecodedGradient, ParseOutcome};
pub use split::{inner_arguments, split_arguments};
