//! The four independent axes that configure a temporal model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// How time is measured when looking for the past of an occurrence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Time {
    /// The past ends exactly at the destination timestamp.
    #[default]
    Continuous,
    /// The past ends at the start of the destination's day bin.
    Discrete,
}

/// Which past quotes may act as a substitution source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Any quote seen in the past.
    #[default]
    All,
    /// Only a quote with the highest occurrence count in the past (ties pass).
    Majority,
}

/// How far back the past reaches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Past {
    /// Everything since the cluster started.
    #[default]
    All,
    /// Only the last day bin before the end of the past.
    LastBin,
}

/// Which destination occurrences may be the target of a substitution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Durl {
    /// No restriction.
    #[default]
    All,
    /// Reject destinations whose quote already appears in the past.
    ExcludePast,
}

/// Immutable combination of the four model axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub time: Time,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub past: Past,
    #[serde(default)]
    pub durl: Durl,
}

impl ModelConfig {
    pub fn new(time: Time, source: Source, past: Past, durl: Durl) -> Self {
        Self {
            time,
            source,
            past,
            durl,
        }
    }

    /// Every one of the 16 axis combinations.
    pub fn all() -> Vec<ModelConfig> {
        let mut configs = Vec::with_capacity(16);
        for time in [Time::Continuous, Time::Discrete] {
            for source in [Source::All, Source::Majority] {
                for past in [Past::All, Past::LastBin] {
                    for durl in [Durl::All, Durl::ExcludePast] {
                        configs.push(ModelConfig::new(time, source, past, durl));
                    }
                }
            }
        }
        configs
    }
}

impl fmt::Display for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Model(time={}, source={}, past={}, durl={})",
            self.time, self.source, self.past, self.durl
        )
    }
}

macro_rules! axis_names {
    ($axis:ty, $label:literal, { $($variant:path => $name:literal),+ $(,)? }) => {
        impl $axis {
            pub fn name(&self) -> &'static str {
                match self {
                    $($variant => $name,)+
                }
            }
        }

        impl fmt::Display for $axis {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $axis {
            type Err = TypesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($variant),)+
                    other => Err(TypesError::UnknownAxisValue {
                        axis: $label,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

axis_names!(Time, "time", { Time::Continuous => "continuous", Time::Discrete => "discrete" });
axis_names!(Source, "source", { Source::All => "all", Source::Majority => "majority" });
axis_names!(Past, "past", { Past::All => "all", Past::LastBin => "last_bin" });
axis_names!(Durl, "durl", { Durl::All => "all", Durl::ExcludePast => "exclude_past" });
