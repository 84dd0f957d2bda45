//! Configuration for the pricing pipeline.
//!
//! Provides runtime knobs with defaults that reproduce the behavior the
//! model was trained and served with.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How an absent numeric feature (unparsed clock, core count or screen
/// resolution) is turned into a model input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "value")]
pub enum MissingValuePolicy {
    /// Feed NaN to the model, which handles missing values natively.
    #[default]
    PassThrough,
    /// Substitute a constant.
    Impute(f64),
    /// Fail the request, naming the absent column.
    Reject,
}

/// Master configuration for the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory holding the JSON artifacts.
    pub artifacts_dir: PathBuf,
    /// Policy for absent numeric features.
    pub missing_values: MissingValuePolicy,
    /// Decimal places of the returned price (default: 2).
    pub price_decimals: u32,
    /// Batches at least this large are priced in parallel (default: 64).
    pub parallel_threshold: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("laptop_predictor_files/model"),
            missing_values: MissingValuePolicy::default(),
            price_decimals: 2,
            parallel_threshold: 64,
        }
    }
}

impl PipelineConfig {
    pub fn with_artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = dir.into();
        self
    }

    pub fn with_missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_values = policy;
        self
    }
}
