pub mod definition;
pub mod style;

pub use definition::*;
pub use style::*;
