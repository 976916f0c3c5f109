mod gradient_type;
mod stop;

pub use gradient_type::*;
pub use stop::*;
