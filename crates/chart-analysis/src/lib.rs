pub mod axis;
pub mod returns;
pub mod rotation;

#[cfg(test)]
mod returns_tests;

pub use axis::*;
pub use returns::*;
pub use rotation::*;
