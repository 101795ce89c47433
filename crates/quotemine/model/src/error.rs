use quotemine_types::{ClusterId, OccurrenceRef, QuoteId, TypesError};
use thiserror::Error;

/// Result type for temporal model queries.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors from the temporal model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("quote {quote} belongs to cluster {quote_cluster}, not to cluster {cluster}")]
    ForeignQuote {
        quote: QuoteId,
        quote_cluster: ClusterId,
        cluster: ClusterId,
    },

    #[error("occurrence {occurrence} is not part of cluster {cluster}")]
    ForeignOccurrence {
        occurrence: OccurrenceRef,
        cluster: ClusterId,
    },

    #[error(transparent)]
    Types(#[from] TypesError),
}
