pub mod tour;

pub use tour::*;
