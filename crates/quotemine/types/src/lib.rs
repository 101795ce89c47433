//! Quotemine Types - entities shared by the substitution mining engine.
//!
//! Quotes spread through a corpus over time. A [`Cluster`] groups the variants
//! of one phrase; each [`Quote`] in it carries its timestamped
//! [`Occurrence`]s. Mining looks for [`Substitution`]s: a later occurrence of
//! one quote that differs from an earlier quote by exactly one word.
//!
//! The storage layer owns these values. The mining core reads them and never
//! mutates them.

#![deny(unsafe_code)]

mod entities;
mod error;
mod ids;
mod interval;
mod model_config;
mod substitution;

pub use entities::{Cluster, Occurrence, Quote, UrlType};
pub use error::{TypesError, TypesResult};
pub use ids::{ClusterId, OccurrenceRef, QuoteId};
pub use interval::Interval;
pub use model_config::{Durl, ModelConfig, Past, Source, Time};
pub use substitution::Substitution;
