use thiserror::Error;

/// Result type for distance computations.
pub type DistanceResult<T> = Result<T, DistanceError>;

/// Invalid use of a distance primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DistanceError {
    #[error("hamming distance needs equal lengths, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("cannot slide a {needle}-long sequence over a {haystack}-long one")]
    NeedleLongerThanHaystack { haystack: usize, needle: usize },
}
