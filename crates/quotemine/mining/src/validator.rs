//! Linguistic filter applied to raw substitution candidates.
//!
//! The miner only knows that two sentences differ by one lemma. Many such
//! differences are noise: number churn, abbreviations, plural suffixes,
//! spelling variants, stopword swaps and typos. The validator rejects them so
//! that only substitutions of one content word by another are kept.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use quotemine_distance::chars;
use quotemine_types::Substitution;
use serde::{Deserialize, Serialize};

use crate::linguistics::{
    is_abbreviation, is_same_ending_us_uk_spelling, is_two_char_extension, starts_with_digit,
    STOPWORDS,
};

/// Why a candidate was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// One of the words starts with a digit.
    NumericWord,
    /// One word is the three-letter prefix of the other.
    Abbreviation,
    /// One word is the other with two more trailing characters.
    SuffixTruncation,
    /// The words are the UK and US spellings of the same word.
    UsUkSpelling,
    /// One of the words is a stopword.
    Stopword,
    /// The words are at most one character edit apart.
    MinorSpelling,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::NumericWord => "numeric word",
            Rejection::Abbreviation => "abbreviation",
            Rejection::SuffixTruncation => "suffix truncation",
            Rejection::UsUkSpelling => "us/uk spelling",
            Rejection::Stopword => "stopword",
            Rejection::MinorSpelling => "minor spelling change",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Checks a substituted word pair, on both tokens and lemmas.
#[derive(Clone, Debug)]
pub struct SubstitutionValidator {
    stopwords: HashSet<String>,
}

impl SubstitutionValidator {
    /// A validator using the built-in English stopword list.
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add words to the stopword list.
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Check a substitution, reporting the first rule it breaks.
    pub fn check(&self, substitution: &Substitution) -> Result<(), Rejection> {
        self.check_pair(substitution.tokens(), substitution.lemmas())
    }

    pub fn validate(&self, substitution: &Substitution) -> bool {
        self.check(substitution).is_ok()
    }

    /// Check a token pair and its lemma pair.
    ///
    /// Rules run in a fixed order, each one on tokens then lemmas, and the
    /// first failure is reported.
    pub fn check_pair(
        &self,
        tokens: (&str, &str),
        lemmas: (&str, &str),
    ) -> Result<(), Rejection> {
        let pairs = [tokens, lemmas];

        if pairs
            .iter()
            .any(|(w1, w2)| starts_with_digit(w1) || starts_with_digit(w2))
        {
            return Err(Rejection::NumericWord);
        }
        if pairs
            .iter()
            .any(|(w1, w2)| is_abbreviation(w1, w2) || is_abbreviation(w2, w1))
        {
            return Err(Rejection::Abbreviation);
        }
        if pairs
            .iter()
            .any(|(w1, w2)| is_two_char_extension(w1, w2) || is_two_char_extension(w2, w1))
        {
            return Err(Rejection::SuffixTruncation);
        }
        if pairs
            .iter()
            .any(|(w1, w2)| is_same_ending_us_uk_spelling(w1, w2))
        {
            return Err(Rejection::UsUkSpelling);
        }
        if pairs
            .iter()
            .any(|(w1, w2)| self.is_stopword(w1) || self.is_stopword(w2))
        {
            return Err(Rejection::Stopword);
        }
        if pairs
            .iter()
            .any(|(w1, w2)| chars::levenshtein(w1, w2) <= 1)
        {
            return Err(Rejection::MinorSpelling);
        }
        Ok(())
    }
}

impl Default for SubstitutionValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// The shared validator with the built-in stopword list.
pub fn default_validator() -> &'static SubstitutionValidator {
    static DEFAULT: OnceLock<SubstitutionValidator> = OnceLock::new();
    DEFAULT.get_or_init(SubstitutionValidator::new)
}

/// Substitution-like values that can be checked for linguistic plausibility.
pub trait SubstitutionValidatable {
    /// Check against the default validator.
    fn check(&self) -> Result<(), Rejection>;

    fn validate(&self) -> bool {
        self.check().is_ok()
    }
}

impl SubstitutionValidatable for Substitution {
    fn check(&self) -> Result<(), Rejection> {
        default_validator().check(self)
    }
}
