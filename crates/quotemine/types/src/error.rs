use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ids::{ClusterId, QuoteId};

/// Result type for entity construction and lookups.
pub type TypesResult<T> = Result<T, TypesError>;

/// Errors raised while building or reading quotemine entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid interval: start {start} is after end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("quote {quote} has {tokens} tokens but {lemmas} lemmas")]
    TokenLemmaMismatch {
        quote: QuoteId,
        tokens: usize,
        lemmas: usize,
    },

    #[error("quote {quote} belongs to cluster {expected}, not {found}")]
    ClusterMismatch {
        quote: QuoteId,
        expected: ClusterId,
        found: ClusterId,
    },

    #[error("quote {0} is already part of the cluster")]
    DuplicateQuote(QuoteId),

    #[error("unknown value {value:?} for model axis {axis}")]
    UnknownAxisValue { axis: &'static str, value: String },

    #[error("alignment out of bounds: start {start} + position {position} in a {len}-word quote")]
    AlignmentOutOfBounds {
        start: usize,
        position: usize,
        len: usize,
    },
}
