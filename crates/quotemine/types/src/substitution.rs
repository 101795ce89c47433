//! Single-word substitutions between a source quote and a later occurrence.

use serde::Serialize;

use crate::entities::Quote;
use crate::error::{TypesError, TypesResult};
use crate::ids::{OccurrenceRef, QuoteId};
use crate::model_config::ModelConfig;

/// A detected substitution.
///
/// The destination's lemmas are aligned inside the source's lemmas at
/// `start`; `position` is the index, within that window, of the only lemma
/// that differs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub source: QuoteId,
    pub destination: QuoteId,
    /// The destination occurrence that triggered detection.
    pub occurrence: OccurrenceRef,
    pub start: usize,
    pub position: usize,
    /// The model configuration the substitution was mined with.
    pub model: ModelConfig,
    tokens: (String, String),
    lemmas: (String, String),
}

impl Substitution {
    /// Build a substitution and capture the substituted word pair.
    pub fn between(
        source: &Quote,
        destination: &Quote,
        occurrence: OccurrenceRef,
        start: usize,
        position: usize,
        model: ModelConfig,
    ) -> TypesResult<Self> {
        let source_index = start + position;
        let out_of_bounds = || TypesError::AlignmentOutOfBounds {
            start,
            position,
            len: source.lemmas().len(),
        };
        let pair = |s: &[String], d: &[String]| -> TypesResult<(String, String)> {
            match (s.get(source_index), d.get(position)) {
                (Some(w1), Some(w2)) => Ok((w1.clone(), w2.clone())),
                _ => Err(out_of_bounds()),
            }
        };

        Ok(Self {
            source: source.id(),
            destination: destination.id(),
            occurrence,
            start,
            position,
            model,
            tokens: pair(source.tokens(), destination.tokens())?,
            lemmas: pair(source.lemmas(), destination.lemmas())?,
        })
    }

    /// The substituted surface tokens, source word first.
    pub fn tokens(&self) -> (&str, &str) {
        (&self.tokens.0, &self.tokens.1)
    }

    /// The substituted lemmas, source lemma first.
    pub fn lemmas(&self) -> (&str, &str) {
        (&self.lemmas.0, &self.lemmas.1)
    }
}
