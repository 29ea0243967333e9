pub mod converter;
pub mod registry;

pub use converter::*;
pub use registry::*;
