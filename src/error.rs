use thiserror::Error;

/// Error returned by the checked conversions in [`crate::convert`].
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum VectorError {
    #[error("Cannot narrow to a 2D vector without losing z (z: {z})")]
    NonZeroZ {
        z: f64,
    },
    #[error("Wrong number of components (actual: {actual}, expected: {expected})")]
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
}
