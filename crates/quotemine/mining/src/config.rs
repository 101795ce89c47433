//! Mining configuration

use std::path::Path;

use quotemine_model::TemporalModel;
use quotemine_types::ModelConfig;
use serde::{Deserialize, Serialize};

use crate::error::{MiningError, MiningResult};
use crate::validator::SubstitutionValidator;

/// Configuration for one mining run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Cap on the number of clusters mined
    #[serde(default)]
    pub limit: Option<usize>,

    /// Temporal model axes
    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Validator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Words added to the built-in stopword list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl MiningConfig {
    /// Load configuration from a TOML file. A missing file gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> MiningResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(contents: &str) -> MiningResult<Self> {
        toml::from_str(contents).map_err(|e| MiningError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> MiningResult<String> {
        toml::to_string(self).map_err(|e| MiningError::Config(e.to_string()))
    }

    /// A fresh temporal model for this configuration.
    pub fn temporal_model(&self) -> TemporalModel {
        TemporalModel::new(self.model)
    }

    /// A validator with the configured extra stopwords.
    pub fn validator(&self) -> SubstitutionValidator {
        SubstitutionValidator::new()
            .with_extra_stopwords(self.validation.extra_stopwords.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotemine_types::{Durl, Past, Source, Time};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = MiningConfig::default();
        assert!(config.limit.is_none());
        assert_eq!(config.model, ModelConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.validation.extra_stopwords.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let config = MiningConfig::load("/nonexistent/path/quotemine.toml").unwrap();
        assert_eq!(config, MiningConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
limit = 100

[model]
time = "discrete"
source = "majority"
past = "last_bin"
durl = "exclude_past"

[logging]
level = "debug"

[validation]
extra_stopwords = ["said"]
"#
        )
        .unwrap();

        let config = MiningConfig::load(file.path()).unwrap();
        assert_eq!(config.limit, Some(100));
        assert_eq!(
            config.model,
            ModelConfig::new(Time::Discrete, Source::Majority, Past::LastBin, Durl::ExcludePast)
        );
        assert_eq!(config.logging.level, "debug");
        assert!(config.validator().is_stopword("said"));
        assert_eq!(config.temporal_model().config(), config.model);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = MiningConfig::from_toml("[model]\nsource = \"majority\"\n").unwrap();
        assert_eq!(config.model.source, Source::Majority);
        assert_eq!(config.model.time, Time::Continuous);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_axis_value_is_rejected() {
        let err = MiningConfig::from_toml("[model]\ntime = \"hourly\"\n").unwrap_err();
        assert!(matches!(err, MiningError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MiningConfig {
            limit: Some(5),
            ..MiningConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(MiningConfig::from_toml(&text).unwrap(), config);
    }
}
