//! Quotemine Model - the temporal model behind substitution mining.
//!
//! A [`TemporalModel`] is configured along four independent axes
//! ([`ModelConfig`]) and answers two questions for a destination occurrence:
//!
//! - which time window is its past ([`TemporalModel::past_interval`]) and which
//!   cluster occurrences fall in it ([`TemporalModel::past_occurrences`])
//! - whether a given quote is an acceptable substitution source for it
//!   ([`TemporalModel::validate`])
//!
//! Answers are memoized per run. The driver must call
//! [`TemporalModel::drop_caches`] between clusters, otherwise the caches grow
//! for the whole run.

#![deny(unsafe_code)]

pub mod cache;
mod error;
mod model;

pub use cache::{CacheStats, MemoCache};
pub use error::{ModelError, ModelResult};
pub use model::{bin_span, ModelCacheStats, TemporalModel};
pub use quotemine_types::ModelConfig;
