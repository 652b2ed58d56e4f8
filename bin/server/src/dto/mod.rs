pub mod common;
pub mod retrieve;

pub use common::*;
pub use retrieve::*;
