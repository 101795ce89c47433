//! Clusters, quotes and their timestamped occurrences.
//!
//! These are built by the storage layer before mining starts and are read-only
//! from then on. A [`Cluster`] owns its [`Quote`]s, and each quote owns its
//! [`Occurrence`]s.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TypesError, TypesResult};
use crate::ids::{ClusterId, OccurrenceRef, QuoteId};

// ── Occurrence ──────────────────────────────────────────────────────────

/// Kind of site an occurrence was found on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlType {
    Blog,
    News,
}

/// One timestamped appearance of a quote (a "durl" when it is the destination).
///
/// Occurrences are only created through their quote, which assigns the
/// identity. They deserialize as part of a [`Quote`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    quote: QuoteId,
    index: usize,
    pub timestamp: DateTime<Utc>,
    /// How many times the quote was repeated at this url.
    pub frequency: u32,
    pub url_type: UrlType,
    pub url: String,
}

impl Occurrence {
    /// Id of the quote this occurrence belongs to.
    pub fn quote(&self) -> QuoteId {
        self.quote
    }

    /// Index of this occurrence among its quote's occurrences.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> OccurrenceRef {
        OccurrenceRef::new(self.quote, self.index)
    }
}

// ── Quote ───────────────────────────────────────────────────────────────

/// A normalized phrase, with parallel token and lemma sequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuoteRecord")]
pub struct Quote {
    id: QuoteId,
    cluster: ClusterId,
    /// Id of the quote in the source dataset.
    pub sid: u64,
    pub filtered: bool,
    tokens: Vec<String>,
    lemmas: Vec<String>,
    occurrences: Vec<Occurrence>,
}

impl Quote {
    /// Build a quote from already tokenized and lemmatized words.
    pub fn new(
        id: QuoteId,
        cluster: ClusterId,
        sid: u64,
        tokens: Vec<String>,
        lemmas: Vec<String>,
    ) -> TypesResult<Self> {
        if tokens.len() != lemmas.len() {
            return Err(TypesError::TokenLemmaMismatch {
                quote: id,
                tokens: tokens.len(),
                lemmas: lemmas.len(),
            });
        }
        Ok(Self {
            id,
            cluster,
            sid,
            filtered: false,
            tokens,
            lemmas,
            occurrences: Vec::new(),
        })
    }

    /// Record a new occurrence and return its identity.
    pub fn push_occurrence(
        &mut self,
        timestamp: DateTime<Utc>,
        frequency: u32,
        url_type: UrlType,
        url: impl Into<String>,
    ) -> OccurrenceRef {
        let index = self.occurrences.len();
        self.occurrences.push(Occurrence {
            quote: self.id,
            index,
            timestamp,
            frequency,
            url_type,
            url: url.into(),
        });
        OccurrenceRef::new(self.id, index)
    }

    /// Builder-style variant of [`Quote::push_occurrence`].
    pub fn with_occurrence(
        mut self,
        timestamp: DateTime<Utc>,
        frequency: u32,
        url_type: UrlType,
        url: impl Into<String>,
    ) -> Self {
        self.push_occurrence(timestamp, frequency, url_type, url);
        self
    }

    pub fn id(&self) -> QuoteId {
        self.id
    }

    pub fn cluster(&self) -> ClusterId {
        self.cluster
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn occurrence(&self, index: usize) -> Option<&Occurrence> {
        self.occurrences.get(index)
    }

    /// Number of occurrences.
    pub fn size(&self) -> usize {
        self.occurrences.len()
    }

    /// Sum of the occurrence frequencies.
    pub fn frequency(&self) -> u64 {
        self.occurrences.iter().map(|o| o.frequency as u64).sum()
    }

    /// Time between the first and last occurrence, zero when there are none.
    pub fn span(&self) -> Duration {
        span_of(self.occurrences.iter())
    }
}

// ── Cluster ─────────────────────────────────────────────────────────────

/// A set of quotes believed to be variants of the same phrase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClusterRecord")]
pub struct Cluster {
    id: ClusterId,
    /// Id of the cluster in the source dataset.
    pub sid: u64,
    /// Dataset the cluster was imported from.
    pub source: String,
    /// Whether the cluster survived the pre-mining filter.
    pub filtered: bool,
    quotes: Vec<Quote>,
    /// Position of each quote in `quotes`.
    #[serde(skip)]
    positions: HashMap<QuoteId, usize>,
}

impl Cluster {
    pub fn new(id: ClusterId, sid: u64, source: impl Into<String>) -> Self {
        Self {
            id,
            sid,
            source: source.into(),
            filtered: false,
            quotes: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn with_filtered(mut self, filtered: bool) -> Self {
        self.filtered = filtered;
        self
    }

    /// Attach a quote; it must point at this cluster and not already be in it.
    pub fn push_quote(&mut self, quote: Quote) -> TypesResult<()> {
        if quote.cluster != self.id {
            return Err(TypesError::ClusterMismatch {
                quote: quote.id,
                expected: quote.cluster,
                found: self.id,
            });
        }
        if self.positions.contains_key(&quote.id) {
            return Err(TypesError::DuplicateQuote(quote.id));
        }
        self.positions.insert(quote.id, self.quotes.len());
        self.quotes.push(quote);
        Ok(())
    }

    /// Builder-style variant of [`Cluster::push_quote`].
    pub fn with_quote(mut self, quote: Quote) -> TypesResult<Self> {
        self.push_quote(quote)?;
        Ok(self)
    }

    pub fn id(&self) -> ClusterId {
        self.id
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn quote(&self, id: QuoteId) -> Option<&Quote> {
        self.positions.get(&id).and_then(|&i| self.quotes.get(i))
    }

    pub fn occurrence(&self, id: OccurrenceRef) -> Option<&Occurrence> {
        self.quote(id.quote).and_then(|q| q.occurrence(id.index))
    }

    /// All occurrences of all quotes, ordered by timestamp then identity.
    pub fn occurrences(&self) -> Vec<&Occurrence> {
        let mut all: Vec<&Occurrence> = self
            .quotes
            .iter()
            .flat_map(|q| q.occurrences.iter())
            .collect();
        all.sort_by_key(|o| (o.timestamp, o.id()));
        all
    }

    /// Earliest occurrence timestamp, if the cluster has any occurrence.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.quotes
            .iter()
            .flat_map(|q| q.occurrences.iter())
            .map(|o| o.timestamp)
            .min()
    }

    /// Number of quotes.
    pub fn size(&self) -> usize {
        self.quotes.len()
    }

    /// Number of occurrences across all quotes.
    pub fn size_urls(&self) -> usize {
        self.quotes.iter().map(Quote::size).sum()
    }

    pub fn frequency(&self) -> u64 {
        self.quotes.iter().map(Quote::frequency).sum()
    }

    pub fn span(&self) -> Duration {
        span_of(self.quotes.iter().flat_map(|q| q.occurrences.iter()))
    }
}

// ── Wire records ────────────────────────────────────────────────────────
//
// Deserialized values are rebuilt through the checked constructors above.
// Occurrence identities are never read back: they are reassigned in order.

#[derive(Deserialize)]
struct OccurrenceRecord {
    timestamp: DateTime<Utc>,
    frequency: u32,
    url_type: UrlType,
    url: String,
}

#[derive(Deserialize)]
struct QuoteRecord {
    id: QuoteId,
    cluster: ClusterId,
    sid: u64,
    #[serde(default)]
    filtered: bool,
    tokens: Vec<String>,
    lemmas: Vec<String>,
    #[serde(default)]
    occurrences: Vec<OccurrenceRecord>,
}

impl TryFrom<QuoteRecord> for Quote {
    type Error = TypesError;

    fn try_from(record: QuoteRecord) -> TypesResult<Self> {
        let mut quote = Quote::new(
            record.id,
            record.cluster,
            record.sid,
            record.tokens,
            record.lemmas,
        )?;
        quote.filtered = record.filtered;
        for o in record.occurrences {
            quote.push_occurrence(o.timestamp, o.frequency, o.url_type, o.url);
        }
        Ok(quote)
    }
}

#[derive(Deserialize)]
struct ClusterRecord {
    id: ClusterId,
    sid: u64,
    source: String,
    #[serde(default)]
    filtered: bool,
    #[serde(default)]
    quotes: Vec<Quote>,
}

impl TryFrom<ClusterRecord> for Cluster {
    type Error = TypesError;

    fn try_from(record: ClusterRecord) -> TypesResult<Self> {
        record.quotes.into_iter().try_fold(
            Cluster::new(record.id, record.sid, record.source).with_filtered(record.filtered),
            Cluster::with_quote,
        )
    }
}

fn span_of<'a>(occurrences: impl Iterator<Item = &'a Occurrence>) -> Duration {
    let mut bounds: Option<(DateTime<Utc>, DateTime<Utc>)> = None;
    for occurrence in occurrences {
        let t = occurrence.timestamp;
        bounds = Some(match bounds {
            None => (t, t),
            Some((first, last)) => (first.min(t), last.max(t)),
        });
    }
    bounds.map_or_else(Duration::zero, |(first, last)| last - first)
}
