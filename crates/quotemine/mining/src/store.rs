//! Storage contract for mining runs, and an in-memory implementation.

use std::collections::BTreeMap;
use std::sync::RwLock;

use quotemine_types::{Cluster, ClusterId, Substitution};

use crate::error::{StoreError, StoreResult};

/// What the miner needs from the storage layer.
///
/// Clusters are read-only from the miner's point of view. Each accepted
/// substitution is committed on its own, so a failed run leaves every
/// previously committed substitution in place.
pub trait SubstitutionStore {
    /// Number of substitutions already stored.
    fn substitution_count(&self) -> StoreResult<usize>;

    /// Number of clusters that passed the pre-mining filter.
    fn filtered_cluster_count(&self) -> StoreResult<usize>;

    /// Ids of filtered clusters in storage order, at most `limit` of them.
    fn filtered_cluster_ids(&self, limit: Option<usize>) -> StoreResult<Vec<ClusterId>>;

    fn load_cluster(&self, id: ClusterId) -> StoreResult<Cluster>;

    /// Persist one accepted substitution.
    fn commit_substitution(&self, substitution: Substitution) -> StoreResult<()>;
}

/// In-memory store, for tests and small corpora.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    clusters: RwLock<BTreeMap<ClusterId, Cluster>>,
    substitutions: RwLock<Vec<Substitution>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cluster. Ids must be unique.
    pub fn insert_cluster(&self, cluster: Cluster) -> StoreResult<()> {
        let mut clusters = self
            .clusters
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        if clusters.contains_key(&cluster.id()) {
            return Err(StoreError::Conflict(format!(
                "cluster {} already exists",
                cluster.id()
            )));
        }
        clusters.insert(cluster.id(), cluster);
        Ok(())
    }

    /// All stored substitutions, in commit order.
    pub fn substitutions(&self) -> StoreResult<Vec<Substitution>> {
        let substitutions = self
            .substitutions
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(substitutions.clone())
    }

    /// Forget every stored substitution, so that mining can run again.
    pub fn clear_substitutions(&self) -> StoreResult<()> {
        self.substitutions
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .clear();
        Ok(())
    }
}

impl SubstitutionStore for InMemoryStore {
    fn substitution_count(&self) -> StoreResult<usize> {
        let substitutions = self
            .substitutions
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(substitutions.len())
    }

    fn filtered_cluster_count(&self) -> StoreResult<usize> {
        let clusters = self
            .clusters
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(clusters.values().filter(|c| c.filtered).count())
    }

    fn filtered_cluster_ids(&self, limit: Option<usize>) -> StoreResult<Vec<ClusterId>> {
        let clusters = self
            .clusters
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(clusters
            .values()
            .filter(|c| c.filtered)
            .map(Cluster::id)
            .take(limit.unwrap_or(usize::MAX))
            .collect())
    }

    fn load_cluster(&self, id: ClusterId) -> StoreResult<Cluster> {
        let clusters = self
            .clusters
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        clusters
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("cluster {id}")))
    }

    fn commit_substitution(&self, substitution: Substitution) -> StoreResult<()> {
        self.substitutions
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .push(substitution);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotemine_types::{ModelConfig, OccurrenceRef, Quote, QuoteId};

    fn cluster(id: u64, filtered: bool) -> Cluster {
        Cluster::new(ClusterId(id), id * 10, "test").with_filtered(filtered)
    }

    #[test]
    fn test_filtered_ids_respect_order_and_limit() {
        let store = InMemoryStore::new();
        for (id, filtered) in [(3, true), (1, true), (2, false), (4, true)] {
            store.insert_cluster(cluster(id, filtered)).unwrap();
        }

        assert_eq!(store.filtered_cluster_count().unwrap(), 3);
        assert_eq!(
            store.filtered_cluster_ids(None).unwrap(),
            vec![ClusterId(1), ClusterId(3), ClusterId(4)]
        );
        assert_eq!(
            store.filtered_cluster_ids(Some(2)).unwrap(),
            vec![ClusterId(1), ClusterId(3)]
        );
        assert!(store.filtered_cluster_ids(Some(0)).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_and_missing_clusters() {
        let store = InMemoryStore::new();
        store.insert_cluster(cluster(1, true)).unwrap();

        assert!(matches!(
            store.insert_cluster(cluster(1, false)),
            Err(StoreError::Conflict(_))
        ));
        assert!(matches!(
            store.load_cluster(ClusterId(9)),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.load_cluster(ClusterId(1)).unwrap().sid, 10);
    }

    #[test]
    fn test_commit_and_clear_substitutions() {
        let words = |s: &str| -> Vec<String> { s.split(' ').map(str::to_string).collect() };
        let source = Quote::new(QuoteId(1), ClusterId(1), 1, words("a b c"), words("a b c")).unwrap();
        let destination =
            Quote::new(QuoteId(2), ClusterId(1), 2, words("a x c"), words("a x c")).unwrap();
        let substitution = Substitution::between(
            &source,
            &destination,
            OccurrenceRef::new(QuoteId(2), 0),
            0,
            1,
            ModelConfig::default(),
        )
        .unwrap();

        let store = InMemoryStore::new();
        store.commit_substitution(substitution.clone()).unwrap();
        assert_eq!(store.substitution_count().unwrap(), 1);
        assert_eq!(store.substitutions().unwrap(), vec![substitution]);

        store.clear_substitutions().unwrap();
        assert_eq!(store.substitution_count().unwrap(), 0);
    }
}
