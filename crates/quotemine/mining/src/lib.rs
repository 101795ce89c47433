//! Quotemine Mining - substitution mining over quote clusters.
//!
//! A mining run takes every filtered cluster from a [`SubstitutionStore`],
//! enumerates its raw candidates with [`ClusterMiner::substitutions`] under a
//! [`TemporalModel`], filters them with a [`SubstitutionValidator`] and commits
//! the survivors back to the store.
//!
//! ```no_run
//! use quotemine_mining::{mine_substitutions, InMemoryStore, MiningConfig};
//!
//! let config = MiningConfig::load("quotemine.toml")?;
//! quotemine_mining::telemetry::init_tracing(&config.logging.level);
//!
//! let store = InMemoryStore::new();
//! // ... insert clusters ...
//! let report = mine_substitutions(&store, &config)?;
//! println!("kept {} of {} candidates", report.kept, report.seen);
//! # Ok::<(), quotemine_mining::MiningError>(())
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod driver;
mod error;
pub mod features;
pub mod linguistics;
pub mod miner;
pub mod store;
pub mod telemetry;
pub mod validator;

pub use config::{LoggingConfig, MiningConfig, ValidationConfig};
pub use driver::{
    mine_substitutions, mine_substitutions_with_model, mine_substitutions_with_validator,
    MiningReport,
};
pub use error::{MiningError, MiningResult, StoreError, StoreResult};
pub use features::{substitution_features, FeatureLookup, FeatureTable, WordFeature, WordSource};
pub use miner::{ClusterMiner, Substitutions};
pub use quotemine_model::TemporalModel;
pub use store::{InMemoryStore, SubstitutionStore};
pub use validator::{default_validator, Rejection, SubstitutionValidatable, SubstitutionValidator};
