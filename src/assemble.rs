//! Feature assembly: merge parsed, encoded and raw numeric values into the
//! vector the model consumes, in the model's column order.

use crate::config::MissingValuePolicy;
use crate::encoding::{CategoricalField, EncodedCategories};
use crate::error::{PricingError, Result};
use crate::features::ExtractedFeatures;
use crate::request::LaptopSpec;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const COL_IPS: &str = "ips";
pub const COL_4K: &str = "4k";
pub const COL_TOUCHSCREEN: &str = "touchscreen";
pub const COL_RETINA: &str = "retina";
pub const COL_SCREEN_RESOLUTION: &str = "screen_resolution";
pub const COL_TOTAL_GB: &str = "total_gb";
pub const COL_SSD_GB: &str = "ssd_gb";
pub const COL_HDD_GB: &str = "hdd_gb";
pub const COL_FLASH_GB: &str = "flash_gb";
pub const COL_HYBRID_GB: &str = "hybrid_gb";
pub const COL_OTHER_GB: &str = "other_gb";
pub const COL_DISK_COUNT: &str = "disk_count";
pub const COL_CPU_GHZ: &str = "cpu_ghz";
pub const COL_CPU_CORE_COUNT: &str = "cpu_core_count";
pub const COL_RAM: &str = "ram";
pub const COL_WEIGHT: &str = "weight";

/// Every column the assembler produces, in assembly order.
pub const ASSEMBLED_COLUMNS: [&str; 24] = [
    "manufacturer",
    "category",
    "cpu_brand",
    "cpu_product",
    "gpu_brand",
    "gpu_product",
    "operating_system",
    "operating_system_version",
    COL_IPS,
    COL_4K,
    COL_TOUCHSCREEN,
    COL_RETINA,
    COL_SCREEN_RESOLUTION,
    COL_TOTAL_GB,
    COL_SSD_GB,
    COL_HDD_GB,
    COL_FLASH_GB,
    COL_HYBRID_GB,
    COL_OTHER_GB,
    COL_DISK_COUNT,
    COL_CPU_GHZ,
    COL_CPU_CORE_COUNT,
    COL_RAM,
    COL_WEIGHT,
];

/// Ordered, named model input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

fn flag(b: bool) -> Option<f64> {
    Some(if b { 1.0 } else { 0.0 })
}

/// Compute every assembled column for one request. Optional numerics stay
/// `None` here; the missing-value policy is applied by [`FeatureAssembler`].
pub fn raw_columns(
    spec: &LaptopSpec,
    features: &ExtractedFeatures,
    codes: &EncodedCategories,
) -> Result<Vec<(&'static str, Option<f64>)>> {
    if spec.screen_size == 0.0 {
        return Err(PricingError::DivisionByZero {
            feature: COL_SCREEN_RESOLUTION.to_string(),
        });
    }
    let resolution = features
        .screen
        .diagonal_pixels
        .map(|d| d / spec.screen_size);

    let storage = &features.storage;
    let mut cols: Vec<(&'static str, Option<f64>)> = CategoricalField::ALL
        .into_iter()
        .map(|f| (f.column(), Some(f64::from(codes.get(f)))))
        .collect();
    cols.extend([
        (COL_IPS, flag(features.screen.ips)),
        (COL_4K, flag(features.screen.uhd_4k)),
        (COL_TOUCHSCREEN, flag(features.screen.touchscreen)),
        (COL_RETINA, flag(features.screen.retina)),
        (COL_SCREEN_RESOLUTION, resolution),
        (COL_TOTAL_GB, Some(storage.total_gb)),
        (COL_SSD_GB, Some(storage.ssd_gb)),
        (COL_HDD_GB, Some(storage.hdd_gb)),
        (COL_FLASH_GB, Some(storage.flash_gb)),
        (COL_HYBRID_GB, Some(storage.hybrid_gb)),
        (COL_OTHER_GB, Some(storage.other_gb)),
        (COL_DISK_COUNT, Some(f64::from(storage.disk_count))),
        (COL_CPU_GHZ, features.cpu.clock_ghz),
        (COL_CPU_CORE_COUNT, features.cpu.core_count.map(f64::from)),
        (COL_RAM, Some(f64::from(spec.ram))),
        (COL_WEIGHT, Some(spec.weight)),
    ]);
    Ok(cols)
}

/// Check an expected column list against the assembled column set.
///
/// Fails on the first duplicate, then on the first expected column the
/// assembler cannot produce, then on the first assembled column the model
/// does not expect.
pub fn reconcile_columns<'a>(
    expected: &[String],
    assembled: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for column in expected {
        if !seen.insert(column.as_str()) {
            return Err(PricingError::DuplicateColumn {
                column: column.clone(),
            });
        }
    }
    let assembled: Vec<&str> = assembled.into_iter().collect();
    if let Some(missing) = expected
        .iter()
        .find(|c| !assembled.contains(&c.as_str()))
    {
        return Err(PricingError::MissingColumn {
            column: missing.clone(),
        });
    }
    if let Some(extra) = assembled.iter().find(|c| !seen.contains(*c)) {
        return Err(PricingError::UnexpectedColumn {
            column: (*extra).to_string(),
        });
    }
    Ok(())
}

/// Orders assembled columns by the model's expected column list.
#[derive(Debug, Clone)]
pub struct FeatureAssembler {
    expected: Vec<String>,
    policy: MissingValuePolicy,
}

impl FeatureAssembler {
    /// Build an assembler, failing if `expected` does not name exactly the
    /// assembled columns.
    pub fn new(expected: Vec<String>, policy: MissingValuePolicy) -> Result<Self> {
        reconcile_columns(&expected, ASSEMBLED_COLUMNS)?;
        Ok(Self { expected, policy })
    }

    pub fn expected_columns(&self) -> &[String] {
        &self.expected
    }

    pub fn policy(&self) -> MissingValuePolicy {
        self.policy
    }

    fn resolve(&self, column: &str, value: Option<f64>) -> Result<f64> {
        match (value, self.policy) {
            (Some(v), _) => Ok(v),
            (None, MissingValuePolicy::PassThrough) => Ok(f64::NAN),
            (None, MissingValuePolicy::Impute(v)) => Ok(v),
            (None, MissingValuePolicy::Reject) => Err(PricingError::MissingValue {
                column: column.to_string(),
            }),
        }
    }

    /// Order and resolve already computed columns.
    pub fn order(&self, raw: &[(&'static str, Option<f64>)]) -> Result<FeatureVector> {
        reconcile_columns(&self.expected, raw.iter().map(|(c, _)| *c))?;
        let by_name: HashMap<&str, Option<f64>> = raw.iter().copied().collect();

        let mut values = Vec::with_capacity(self.expected.len());
        for column in &self.expected {
            // Presence is guaranteed by reconcile_columns
            let value = by_name.get(column.as_str()).copied().flatten();
            values.push(self.resolve(column, value)?);
        }
        Ok(FeatureVector {
            columns: self.expected.clone(),
            values,
        })
    }

    /// Assemble the model input for one request.
    pub fn assemble(
        &self,
        spec: &LaptopSpec,
        features: &ExtractedFeatures,
        codes: &EncodedCategories,
    ) -> Result<FeatureVector> {
        let raw = raw_columns(spec, features, codes)?;
        self.order(&raw)
    }
}
