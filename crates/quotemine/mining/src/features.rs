//! Word features of substituted words.
//!
//! Feature values come from external norms and lexicons; this module only
//! knows their names, which word representation each one reads, and how to
//! combine per-word values into substitution features.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use quotemine_types::{Cluster, Quote, Substitution};
use serde::{Deserialize, Serialize};

use crate::error::{quote_in, MiningError, MiningResult};

/// Which word sequence a feature reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordSource {
    Tokens,
    Lemmas,
}

/// Named word features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordFeature {
    SyllablesCount,
    PhonemesCount,
    LettersCount,
    SynonymsCount,
    Aoa,
    FaDegree,
    FaPagerank,
    FaBetweenness,
    FaClustering,
    Frequency,
    PhonologicalDensity,
    OrthographicalDensity,
}

impl WordFeature {
    pub const ALL: [WordFeature; 12] = [
        WordFeature::SyllablesCount,
        WordFeature::PhonemesCount,
        WordFeature::LettersCount,
        WordFeature::SynonymsCount,
        WordFeature::Aoa,
        WordFeature::FaDegree,
        WordFeature::FaPagerank,
        WordFeature::FaBetweenness,
        WordFeature::FaClustering,
        WordFeature::Frequency,
        WordFeature::PhonologicalDensity,
        WordFeature::OrthographicalDensity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WordFeature::SyllablesCount => "syllables_count",
            WordFeature::PhonemesCount => "phonemes_count",
            WordFeature::LettersCount => "letters_count",
            WordFeature::SynonymsCount => "synonyms_count",
            WordFeature::Aoa => "aoa",
            WordFeature::FaDegree => "fa_degree",
            WordFeature::FaPagerank => "fa_pagerank",
            WordFeature::FaBetweenness => "fa_betweenness",
            WordFeature::FaClustering => "fa_clustering",
            WordFeature::Frequency => "frequency",
            WordFeature::PhonologicalDensity => "phonological_density",
            WordFeature::OrthographicalDensity => "orthographical_density",
        }
    }

    /// The representation the feature is defined on.
    ///
    /// Pronunciation and spelling features read surface tokens; lexical and
    /// association-norm features read lemmas.
    pub fn source(&self) -> WordSource {
        match self {
            WordFeature::SyllablesCount
            | WordFeature::PhonemesCount
            | WordFeature::LettersCount
            | WordFeature::PhonologicalDensity
            | WordFeature::OrthographicalDensity => WordSource::Tokens,
            WordFeature::SynonymsCount
            | WordFeature::Aoa
            | WordFeature::FaDegree
            | WordFeature::FaPagerank
            | WordFeature::FaBetweenness
            | WordFeature::FaClustering
            | WordFeature::Frequency => WordSource::Lemmas,
        }
    }
}

impl fmt::Display for WordFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WordFeature {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WordFeature::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| MiningError::UnknownFeature(s.to_string()))
    }
}

/// Source of per-word feature values.
pub trait FeatureLookup {
    /// The feature value of `word`, `None` if the word is unknown.
    fn lookup(&self, feature: WordFeature, word: &str) -> Option<f64>;

    /// Like [`FeatureLookup::lookup`], with unknown words as NaN.
    fn value(&self, feature: WordFeature, word: &str) -> f64 {
        self.lookup(feature, word).unwrap_or(f64::NAN)
    }
}

/// Feature values held in memory.
///
/// `letters_count` needs no data and is computed for any word that has no
/// stored value.
#[derive(Clone, Debug, Default)]
pub struct FeatureTable {
    values: HashMap<WordFeature, HashMap<String, f64>>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, feature: WordFeature, word: impl Into<String>, value: f64) {
        self.values
            .entry(feature)
            .or_default()
            .insert(word.into(), value);
    }

    pub fn with_values<I, S>(mut self, feature: WordFeature, values: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        for (word, value) in values {
            self.insert(feature, word, value);
        }
        self
    }

    /// Number of words with a stored value for `feature`.
    pub fn len(&self, feature: WordFeature) -> usize {
        self.values.get(&feature).map_or(0, HashMap::len)
    }
}

impl FeatureLookup for FeatureTable {
    fn lookup(&self, feature: WordFeature, word: &str) -> Option<f64> {
        let stored = self
            .values
            .get(&feature)
            .and_then(|words| words.get(word))
            .copied();
        match (stored, feature) {
            (None, WordFeature::LettersCount) => Some(letters_count(word)),
            (stored, _) => stored,
        }
    }
}

/// Number of characters in a word.
pub fn letters_count(word: &str) -> f64 {
    word.chars().count() as f64
}

/// Mean of the non-NaN values, NaN if there are none.
pub fn nan_mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Feature values of the source and destination words of a substitution.
///
/// With `sentence_relative`, each value is reduced by the mean feature value
/// of its sentence: the aligned source window for the source word, the whole
/// destination for the destination word. Words without a value are ignored
/// in the means.
pub fn substitution_features(
    substitution: &Substitution,
    cluster: &Cluster,
    lookup: &impl FeatureLookup,
    feature: WordFeature,
    sentence_relative: bool,
) -> MiningResult<(f64, f64)> {
    let (word1, word2) = match feature.source() {
        WordSource::Tokens => substitution.tokens(),
        WordSource::Lemmas => substitution.lemmas(),
    };
    let mut feature1 = lookup.value(feature, word1);
    let mut feature2 = lookup.value(feature, word2);

    if sentence_relative {
        let source = quote_in(cluster, substitution.source)?;
        let destination = quote_in(cluster, substitution.destination)?;
        let destination_words = words(destination, feature.source());
        let source_words = words(source, feature.source())
            .iter()
            .skip(substitution.start)
            .take(destination_words.len());

        feature1 -= nan_mean(source_words.map(|w| lookup.value(feature, w)));
        feature2 -= nan_mean(destination_words.iter().map(|w| lookup.value(feature, w)));
    }

    Ok((feature1, feature2))
}

fn words(quote: &Quote, source: WordSource) -> &[String] {
    match source {
        WordSource::Tokens => quote.tokens(),
        WordSource::Lemmas => quote.lemmas(),
    }
}
