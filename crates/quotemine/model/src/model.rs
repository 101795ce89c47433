//! The temporal model: what counts as "the past" of an occurrence, and which
//! (source quote, destination occurrence) pairs are acceptable.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use quotemine_types::{
    Cluster, ClusterId, Durl, Interval, ModelConfig, Occurrence, OccurrenceRef, Past, Quote,
    QuoteId, Source, Time,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::{CacheStats, MemoCache};
use crate::error::{ModelError, ModelResult};

/// Width of one discrete time bin.
pub fn bin_span() -> Duration {
    Duration::days(1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct PastKey {
    cluster: ClusterId,
    durl: OccurrenceRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct ValidationKey {
    cluster: ClusterId,
    source: QuoteId,
    durl: OccurrenceRef,
}

/// A cluster's occurrences as (timestamp, identity), sorted.
type Timeline = Arc<[(DateTime<Utc>, OccurrenceRef)]>;

/// Counters for the model caches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCacheStats {
    pub validations: CacheStats,
    pub past_occurrences: CacheStats,
    pub past_intervals: CacheStats,
    pub timelines: CacheStats,
}

impl ModelCacheStats {
    pub fn total_entries(&self) -> usize {
        self.validations.entries
            + self.past_occurrences.entries
            + self.past_intervals.entries
            + self.timelines.entries
    }
}

/// A configured temporal model with its per-run caches.
///
/// Query methods take `&mut self` because they fill the caches. One model
/// instance serves one worker; call [`TemporalModel::drop_caches`] before
/// moving to the next cluster.
#[derive(Debug)]
pub struct TemporalModel {
    config: ModelConfig,
    validations: MemoCache<ValidationKey, bool>,
    past_occurrences: MemoCache<PastKey, Arc<[OccurrenceRef]>>,
    past_intervals: MemoCache<PastKey, Interval>,
    timelines: MemoCache<ClusterId, Timeline>,
}

impl TemporalModel {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            validations: MemoCache::new(),
            past_occurrences: MemoCache::new(),
            past_intervals: MemoCache::new(),
            timelines: MemoCache::new(),
        }
    }

    pub fn config(&self) -> ModelConfig {
        self.config
    }

    /// The window considered to be the past of `durl` inside `cluster`.
    pub fn past_interval(&mut self, cluster: &Cluster, durl: &Occurrence) -> ModelResult<Interval> {
        let key = PastKey {
            cluster: cluster.id(),
            durl: durl.id(),
        };
        let config = self.config;
        let cluster_start = self.timeline(cluster).first().map(|(t, _)| *t);
        self.past_intervals.get_or_try_compute(key, || {
            compute_past_interval(config, cluster, cluster_start, durl)
        })
    }

    /// The cluster's occurrences in time order, sorted once per cluster.
    fn timeline(&mut self, cluster: &Cluster) -> Timeline {
        self.timelines.get_or_compute(cluster.id(), || {
            cluster
                .occurrences()
                .into_iter()
                .map(|o| (o.timestamp, o.id()))
                .collect()
        })
    }

    /// Identities of the cluster occurrences inside the past of `durl`, in time order.
    pub fn past_occurrence_refs(
        &mut self,
        cluster: &Cluster,
        durl: &Occurrence,
    ) -> ModelResult<Arc<[OccurrenceRef]>> {
        let key = PastKey {
            cluster: cluster.id(),
            durl: durl.id(),
        };
        if let Some(refs) = self.past_occurrences.get(&key) {
            return Ok(refs);
        }

        let past = self.past_interval(cluster, durl)?;
        let timeline = self.timeline(cluster);
        let from = timeline.partition_point(|(t, _)| *t < past.start());
        let to = timeline.partition_point(|(t, _)| *t < past.end());
        let refs: Arc<[OccurrenceRef]> = timeline[from..to]
            .iter()
            .map(|(_, id)| *id)
            .collect();
        self.past_occurrences.insert(key, Arc::clone(&refs));
        Ok(refs)
    }

    /// The cluster occurrences inside the past of `durl`, in time order.
    pub fn past_occurrences<'c>(
        &mut self,
        cluster: &'c Cluster,
        durl: &Occurrence,
    ) -> ModelResult<Vec<&'c Occurrence>> {
        let refs = self.past_occurrence_refs(cluster, durl)?;
        Ok(refs.iter().filter_map(|id| cluster.occurrence(*id)).collect())
    }

    /// Whether `source` is an acceptable source quote for `durl`.
    ///
    /// Rules run in a fixed order and stop at the first failure: the source
    /// must occur in the past, then satisfy the source rule, then the
    /// destination rule.
    pub fn validate(
        &mut self,
        cluster: &Cluster,
        source: &Quote,
        durl: &Occurrence,
    ) -> ModelResult<bool> {
        if source.cluster() != cluster.id() {
            return Err(ModelError::ForeignQuote {
                quote: source.id(),
                quote_cluster: source.cluster(),
                cluster: cluster.id(),
            });
        }

        let key = ValidationKey {
            cluster: cluster.id(),
            source: source.id(),
            durl: durl.id(),
        };
        if let Some(valid) = self.validations.get(&key) {
            return Ok(valid);
        }

        let valid = self.validate_base(cluster, source, durl)?
            && self.validate_source(cluster, source, durl)?
            && self.validate_durl(cluster, durl)?;
        self.validations.insert(key, valid);
        Ok(valid)
    }

    fn validate_base(
        &mut self,
        cluster: &Cluster,
        source: &Quote,
        durl: &Occurrence,
    ) -> ModelResult<bool> {
        let past = self.past_interval(cluster, durl)?;
        Ok(source
            .occurrences()
            .iter()
            .any(|o| past.contains(o.timestamp)))
    }

    fn validate_source(
        &mut self,
        cluster: &Cluster,
        source: &Quote,
        durl: &Occurrence,
    ) -> ModelResult<bool> {
        match self.config.source {
            Source::All => Ok(true),
            Source::Majority => {
                let refs = self.past_occurrence_refs(cluster, durl)?;
                let mut counts: HashMap<QuoteId, usize> = HashMap::new();
                for id in refs.iter() {
                    *counts.entry(id.quote).or_insert(0) += 1;
                }
                // Every quote reaching the top count passes.
                Ok(match (counts.get(&source.id()), counts.values().max()) {
                    (Some(count), Some(max)) => count == max,
                    _ => false,
                })
            }
        }
    }

    fn validate_durl(&mut self, cluster: &Cluster, durl: &Occurrence) -> ModelResult<bool> {
        match self.config.durl {
            Durl::All => Ok(true),
            Durl::ExcludePast => {
                let refs = self.past_occurrence_refs(cluster, durl)?;
                Ok(!refs.iter().any(|id| id.quote == durl.quote()))
            }
        }
    }

    /// Empty every cache.
    pub fn drop_caches(&mut self) {
        debug!(
            validations = self.validations.len(),
            past_occurrences = self.past_occurrences.len(),
            past_intervals = self.past_intervals.len(),
            timelines = self.timelines.len(),
            "Dropping temporal model caches"
        );
        self.validations.clear();
        self.past_occurrences.clear();
        self.past_intervals.clear();
        self.timelines.clear();
    }

    pub fn cache_stats(&self) -> ModelCacheStats {
        ModelCacheStats {
            validations: self.validations.stats(),
            past_occurrences: self.past_occurrences.stats(),
            past_intervals: self.past_intervals.stats(),
            timelines: self.timelines.stats(),
        }
    }
}

fn compute_past_interval(
    config: ModelConfig,
    cluster: &Cluster,
    cluster_start: Option<DateTime<Utc>>,
    durl: &Occurrence,
) -> ModelResult<Interval> {
    let foreign = || ModelError::ForeignOccurrence {
        occurrence: durl.id(),
        cluster: cluster.id(),
    };
    if cluster.occurrence(durl.id()) != Some(durl) {
        return Err(foreign());
    }
    let cluster_start = cluster_start.ok_or_else(foreign)?;
    // Bins are aligned to the midnight before the cluster starts.
    let origin = midnight(cluster_start);

    let end = match config.time {
        Time::Continuous => durl.timestamp,
        Time::Discrete => {
            // Whole days since the origin; the destination is never before it.
            let bins = (durl.timestamp - origin).num_days();
            cluster_start.max(origin + Duration::days(bins))
        }
    };

    let start = match config.past {
        Past::All => cluster_start,
        Past::LastBin => cluster_start.max(end - bin_span()),
    };

    Ok(Interval::new(start, end)?)
}

fn midnight(t: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&t.date_naive().and_time(NaiveTime::MIN))
}
