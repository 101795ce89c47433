//! Full mining runs over a store.

use quotemine_model::TemporalModel;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MiningConfig;
use crate::error::{MiningError, MiningResult};
use crate::miner::ClusterMiner;
use crate::store::SubstitutionStore;
use crate::validator::{default_validator, SubstitutionValidator};

/// Counters for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningReport {
    /// Clusters mined.
    pub clusters: usize,
    /// Raw candidates produced by the miner.
    pub seen: usize,
    /// Candidates that passed validation and were committed.
    pub kept: usize,
}

/// Mine every filtered cluster in `store` with `model` and the default validator.
pub fn mine_substitutions_with_model<S>(
    store: &S,
    model: &mut TemporalModel,
    limit: Option<usize>,
) -> MiningResult<MiningReport>
where
    S: SubstitutionStore + ?Sized,
{
    mine_substitutions_with_validator(store, model, default_validator(), limit)
}

/// Mine a store as described by `config`.
pub fn mine_substitutions<S>(store: &S, config: &MiningConfig) -> MiningResult<MiningReport>
where
    S: SubstitutionStore + ?Sized,
{
    let mut model = config.temporal_model();
    let validator = config.validator();
    mine_substitutions_with_validator(store, &mut model, &validator, config.limit)
}

/// Mine every filtered cluster in `store`, committing the candidates that
/// `validator` accepts.
///
/// The run refuses to start when the store already holds substitutions or has
/// no filtered clusters. Model caches are dropped before each cluster.
pub fn mine_substitutions_with_validator<S>(
    store: &S,
    model: &mut TemporalModel,
    validator: &SubstitutionValidator,
    limit: Option<usize>,
) -> MiningResult<MiningReport>
where
    S: SubstitutionStore + ?Sized,
{
    info!(model = %model.config(), limit = ?limit, "Mining substitutions");

    let existing = store.substitution_count()?;
    if existing != 0 {
        return Err(MiningError::AlreadyMined { count: existing });
    }
    if store.filtered_cluster_count()? == 0 {
        return Err(MiningError::NoFilteredClusters);
    }

    let cluster_ids = store.filtered_cluster_ids(limit)?;
    info!(clusters = cluster_ids.len(), "Got clusters to mine");

    let mut report = MiningReport::default();
    for id in cluster_ids {
        model.drop_caches();
        let cluster = store.load_cluster(id)?;
        report.clusters += 1;

        for candidate in cluster.substitutions(model) {
            let substitution = candidate?;
            report.seen += 1;

            match validator.check(&substitution) {
                Ok(()) => {
                    debug!(
                        cluster = cluster.sid,
                        source = %substitution.source,
                        destination = %substitution.destination,
                        "Committing substitution"
                    );
                    store.commit_substitution(substitution)?;
                    report.kept += 1;
                }
                Err(rejection) => {
                    debug!(
                        cluster = cluster.sid,
                        reason = %rejection,
                        "Dropping substitution"
                    );
                }
            }
        }
    }
    model.drop_caches();

    info!(seen = report.seen, kept = report.kept, "Mined substitutions");

    let stored = store.substitution_count()?;
    if stored != report.kept {
        return Err(MiningError::InvariantViolation(format!(
            "kept {} substitutions but the store holds {}",
            report.kept, stored
        )));
    }
    Ok(report)
}
