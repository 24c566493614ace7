use thiserror::Error;

/// Ways a caller-supplied matrix can fail to describe a relation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    #[error("a relation needs at least one element")]
    Empty,

    #[error("a relation on {dim} elements doesn't fit in memory")]
    TooLarge { dim: usize },

    #[error("row {row} has {found} entries, expected {expected}")]
    NotSquare { row: usize, expected: usize, found: usize },

    #[error("entry ({row}, {column}) is {value}, expected 0 or 1")]
    NotBinary { row: usize, column: usize, value: u8 },

    #[error("{len} entries cannot form a {dim}x{dim} matrix")]
    LengthMismatch { dim: usize, len: usize },

    #[error("dimension mismatch: {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("element {index} is out of range for a relation on {dim} elements")]
    OutOfRange { index: usize, dim: usize },

    #[error("elements must be sorted and unique, {index} is out of order")]
    Unsorted { index: usize },

    #[error("cannot compose an empty chain of relations")]
    EmptyChain,
}
