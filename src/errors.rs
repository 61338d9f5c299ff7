use std::error::Error;

use thiserror::Error;

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixInvariantError {
    #[error("matrix must contain at least one vertex")]
    Empty,

    #[error("matrix backing storage holds {found} weights, expected {expected}")]
    StorageSize { expected: usize, found: usize },
}
