use std::path::PathBuf;

use clap::{Args, Parser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Path to the labeled flow-record CSV file
    pub dataset: PathBuf,

    /// Optional TOML configuration file overriding the preparation and
    /// model options
    #[clap(long)]
    pub config_file: Option<PathBuf>,

    /// Options shaping the working table before training
    #[clap(flatten)]
    pub prepare: PrepareConfig,

    /// Options for the training session
    #[clap(flatten)]
    pub model: ModelConfig,
}

/// On-disk configuration file, mirroring the two CLI argument groups.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub prepare: PrepareConfig,
    pub model: ModelConfig,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareConfig {
    /// Whether to subsample the working table down to `sample_size` rows
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub sample: bool,

    /// The number of rows kept when sampling is enabled
    #[clap(long, default_value_t = 10_000)]
    pub sample_size: usize,

    /// Train on the attack-type column instead of the benign/attack indicator
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub binary: bool,

    /// IP-address anonymization applied to the working table
    #[clap(long, value_enum, default_value_t = AnonymizationMode::Disabled)]
    pub anonymization: AnonymizationMode,

    /// Seed for sampling and the train/test split
    #[clap(long, default_value_t = 42)]
    pub seed: u64,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        PrepareConfig {
            sample: true,
            sample_size: 10_000,
            binary: false,
            anonymization: AnonymizationMode::Disabled,
            seed: 42,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// The classifier to train
    #[clap(short, long, value_enum, default_value_t = ModelKind::Knn)]
    pub model: ModelKind,

    /// Number of neighbors considered by the knn classifier
    #[clap(long, default_value_t = 5)]
    pub neighbors: usize,

    /// Fraction of rows held out for evaluation
    #[clap(long, default_value_t = 0.3)]
    pub test_fraction: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            model: ModelKind::Knn,
            neighbors: 5,
            test_fraction: 0.3,
        }
    }
}

#[derive(
    clap::ValueEnum,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnonymizationMode {
    /// Leave addresses untouched
    Disabled,

    /// Zero the host octet, keeping subnet-level distinguishability
    Truncate24,

    /// Replace every address with one constant placeholder
    Blackmarker,
}

#[derive(
    clap::ValueEnum,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelKind {
    /// k-nearest-neighbors classifier
    Knn,

    /// Decision-tree classifier
    Dt,

    /// Random-forest classifier
    Rf,
}
