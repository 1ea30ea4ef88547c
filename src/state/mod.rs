//! Form state module

mod field;
mod registry;
mod status;

pub use field::*;
pub use registry::*;
pub use status::*;
