use quotemine_distance::DistanceError;
use quotemine_model::ModelError;
use quotemine_types::{Cluster, ClusterId, Quote, QuoteId, TypesError};
use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by a [`crate::SubstitutionStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for mining runs.
pub type MiningResult<T> = Result<T, MiningError>;

/// Errors from mining, configuration and storage.
#[derive(Debug, Error)]
pub enum MiningError {
    #[error("found {count} existing substitutions, not mining")]
    AlreadyMined { count: usize },

    #[error("found no filtered clusters, aborting")]
    NoFilteredClusters,

    #[error("aligned window differs from the destination at {differences} positions, expected 1")]
    AmbiguousAlignment { differences: usize },

    #[error("quote {quote} is not part of cluster {cluster}")]
    UnknownQuote { quote: QuoteId, cluster: ClusterId },

    #[error("unknown feature: '{0}'")]
    UnknownFeature(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Types(#[from] TypesError),

    #[error(transparent)]
    Distance(#[from] DistanceError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The quote `id` of `cluster`, or [`MiningError::UnknownQuote`].
pub(crate) fn quote_in(cluster: &Cluster, id: QuoteId) -> MiningResult<&Quote> {
    cluster.quote(id).ok_or(MiningError::UnknownQuote {
        quote: id,
        cluster: cluster.id(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MiningError::AlreadyMined { count: 3 };
        assert_eq!(err.to_string(), "found 3 existing substitutions, not mining");

        let err = MiningError::AmbiguousAlignment { differences: 2 };
        assert!(err.to_string().contains("2 positions"));
    }

    #[test]
    fn test_lower_layers_convert() {
        let err: MiningError = StoreError::NotFound("cluster 4".into()).into();
        assert!(matches!(err, MiningError::Store(StoreError::NotFound(_))));
        assert_eq!(err.to_string(), "not found: cluster 4");

        let err: MiningError = DistanceError::LengthMismatch { left: 1, right: 2 }.into();
        assert!(matches!(err, MiningError::Distance(_)));
    }

    #[test]
    fn test_quote_in() {
        let words = vec!["a".to_string()];
        let cluster = Cluster::new(ClusterId(3), 3, "test")
            .with_quote(Quote::new(QuoteId(1), ClusterId(3), 1, words.clone(), words).unwrap())
            .unwrap();

        assert_eq!(quote_in(&cluster, QuoteId(1)).unwrap().id(), QuoteId(1));
        match quote_in(&cluster, QuoteId(2)) {
            Err(MiningError::UnknownQuote { quote, cluster }) => {
                assert_eq!((quote, cluster), (QuoteId(2), ClusterId(3)));
            }
            other => panic!("expected UnknownQuote, got {other:?}"),
        }
    }
}
