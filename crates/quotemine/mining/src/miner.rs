//! Candidate generation: single-lemma differences between a cluster's quotes
//! and the occurrences that follow them.

use std::collections::BTreeSet;
use std::iter::FusedIterator;

use quotemine_distance::words;
use quotemine_model::TemporalModel;
use quotemine_types::{Cluster, Occurrence, Quote, QuoteId, Substitution};
use tracing::debug;

use crate::error::{quote_in, MiningError, MiningResult};

/// Clusters that can be mined for substitutions.
pub trait ClusterMiner {
    /// Lazily enumerate the raw substitution candidates under `model`.
    ///
    /// The returned iterator is single-pass. It borrows the model mutably
    /// because the model fills its caches as candidates are checked.
    fn substitutions<'a>(&'a self, model: &'a mut TemporalModel) -> Substitutions<'a>;
}

impl ClusterMiner for Cluster {
    fn substitutions<'a>(&'a self, model: &'a mut TemporalModel) -> Substitutions<'a> {
        Substitutions::new(self, model)
    }
}

/// Pull-based iterator over the raw substitutions of one cluster.
///
/// Destination occurrences are visited in time order. For each of them the
/// candidate sources are the distinct quotes seen in its past, minus its own
/// quote, that are at least as long as the destination. Iteration stops after
/// the first error.
pub struct Substitutions<'a> {
    cluster: &'a Cluster,
    model: &'a mut TemporalModel,
    durls: std::vec::IntoIter<&'a Occurrence>,
    current: Option<Destination<'a>>,
    finished: bool,
}

struct Destination<'a> {
    durl: &'a Occurrence,
    quote: &'a Quote,
    sources: std::vec::IntoIter<&'a Quote>,
}

impl<'a> Substitutions<'a> {
    fn new(cluster: &'a Cluster, model: &'a mut TemporalModel) -> Self {
        Self {
            cluster,
            model,
            durls: cluster.occurrences().into_iter(),
            current: None,
            finished: false,
        }
    }

    fn destination(&mut self, durl: &'a Occurrence) -> MiningResult<Destination<'a>> {
        let cluster: &'a Cluster = self.cluster;
        let quote = quote_in(cluster, durl.quote())?;
        let past = self.model.past_occurrence_refs(cluster, durl)?;

        let source_ids: BTreeSet<QuoteId> = past
            .iter()
            .map(|occurrence| occurrence.quote)
            .filter(|id| *id != quote.id())
            .collect();
        let sources = source_ids
            .into_iter()
            .map(|id| quote_in(cluster, id))
            .collect::<MiningResult<Vec<&'a Quote>>>()?
            .into_iter()
            .filter(|source| source.lemmas().len() >= quote.lemmas().len())
            .collect::<Vec<_>>();

        Ok(Destination {
            durl,
            quote,
            sources: sources.into_iter(),
        })
    }

    fn try_source(
        &mut self,
        source: &'a Quote,
        durl: &'a Occurrence,
        destination: &'a Quote,
    ) -> MiningResult<Option<Substitution>> {
        let matched = words::subhamming(source.lemmas(), destination.lemmas())?;
        if matched.distance != 1 {
            return Ok(None);
        }
        if !self.model.validate(self.cluster, source, durl)? {
            return Ok(None);
        }

        let window = &source.lemmas()[matched.offset..matched.offset + matched.length];
        let differences = words::differing_positions(window, destination.lemmas())?;
        let position = match differences.as_slice() {
            [position] => *position,
            _ => {
                return Err(MiningError::AmbiguousAlignment {
                    differences: differences.len(),
                })
            }
        };

        debug!(
            source = source.sid,
            destination = destination.sid,
            occurrence = durl.index(),
            start = matched.offset,
            position,
            "Found candidate substitution"
        );

        Ok(Some(Substitution::between(
            source,
            destination,
            durl.id(),
            matched.offset,
            position,
            self.model.config(),
        )?))
    }

    fn next_candidate(&mut self) -> MiningResult<Option<Substitution>> {
        loop {
            let Some(current) = self.current.as_mut() else {
                match self.durls.next() {
                    Some(durl) => {
                        self.current = Some(self.destination(durl)?);
                        continue;
                    }
                    None => return Ok(None),
                }
            };

            let (durl, destination) = (current.durl, current.quote);
            match current.sources.next() {
                Some(source) => {
                    if let Some(substitution) = self.try_source(source, durl, destination)? {
                        return Ok(Some(substitution));
                    }
                }
                None => self.current = None,
            }
        }
    }
}

impl Iterator for Substitutions<'_> {
    type Item = MiningResult<Substitution>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_candidate() {
            Ok(Some(substitution)) => Some(Ok(substitution)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Substitutions<'_> {}
