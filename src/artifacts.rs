//! Loading of the read-only artifacts produced at training time.
//!
//! Three JSON files live side by side in one directory:
//! - `laptop_price_model_features.json`: the model's column order
//! - `laptop_feature_encoding_maps.json`: per-field category → code tables
//! - `laptop_feature_replace_strings.json`: per-field fallback values
//!
//! Artifacts are validated once at load so that an inconsistent set fails at
//! startup rather than on the first request that happens to need a fallback.

use crate::assemble::{reconcile_columns, ASSEMBLED_COLUMNS};
use crate::encoding::{CategoricalField, CategoryEncoder, EncodingTable};
use crate::error::{PricingError, Result};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const FEATURES_FILE: &str = "laptop_price_model_features.json";
pub const ENCODING_MAPS_FILE: &str = "laptop_feature_encoding_maps.json";
pub const FALLBACKS_FILE: &str = "laptop_feature_replace_strings.json";

/// Column order, encoding tables and fallback values for one trained model.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    feature_columns: Vec<String>,
    encoder: CategoryEncoder,
}

fn read_json<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    let text = fs::read_to_string(&path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Failed to read artifact");
        PricingError::Io(e)
    })?;
    serde_json::from_str(&text).map_err(|e| {
        PricingError::Serialization(format!("{}: {}", path.display(), e))
    })
}

/// Keep the fields the pipeline knows about; other keys are ignored.
fn by_field<T>(raw: BTreeMap<String, T>, what: &str) -> HashMap<CategoricalField, T> {
    raw.into_iter()
        .filter_map(|(key, value)| match CategoricalField::from_key(&key) {
            Some(field) => Some((field, value)),
            None => {
                warn!(key = %key, artifact = what, "Ignoring unknown categorical field");
                None
            }
        })
        .collect()
}

impl ModelArtifacts {
    /// Build and validate artifacts from in-memory parts.
    pub fn from_parts(
        feature_columns: Vec<String>,
        tables: HashMap<CategoricalField, EncodingTable>,
        fallbacks: HashMap<CategoricalField, String>,
    ) -> Result<Self> {
        let artifacts = Self {
            feature_columns,
            encoder: CategoryEncoder::new(tables, fallbacks),
        };
        artifacts.validate()?;
        Ok(artifacts)
    }

    /// Parse artifacts from the contents of the three JSON files.
    pub fn from_json_strs(features: &str, encoding_maps: &str, fallbacks: &str) -> Result<Self> {
        let columns: Vec<String> = serde_json::from_str(features)?;
        let tables: BTreeMap<String, EncodingTable> = serde_json::from_str(encoding_maps)?;
        let fallbacks: BTreeMap<String, String> = serde_json::from_str(fallbacks)?;
        Self::from_parts(
            columns,
            by_field(tables, ENCODING_MAPS_FILE),
            by_field(fallbacks, FALLBACKS_FILE),
        )
    }

    /// Load artifacts from a directory.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let columns: Vec<String> = read_json(dir, FEATURES_FILE)?;
        let tables: BTreeMap<String, EncodingTable> = read_json(dir, ENCODING_MAPS_FILE)?;
        let fallbacks: BTreeMap<String, String> = read_json(dir, FALLBACKS_FILE)?;

        let artifacts = Self::from_parts(
            columns,
            by_field(tables, ENCODING_MAPS_FILE),
            by_field(fallbacks, FALLBACKS_FILE),
        )?;
        info!(
            dir = %dir.display(),
            columns = artifacts.feature_columns.len(),
            "Model artifacts loaded"
        );
        Ok(artifacts)
    }

    /// Check fallbacks and column list against what the pipeline produces.
    pub fn validate(&self) -> Result<()> {
        self.encoder.validate()?;
        reconcile_columns(&self.feature_columns, ASSEMBLED_COLUMNS)
    }

    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    pub fn encoder(&self) -> &CategoryEncoder {
        &self.encoder
    }
}
