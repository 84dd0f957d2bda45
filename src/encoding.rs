//! Category encoding with fallback substitution.
//!
//! Every categorical field is encoded through the lookup table fitted at
//! training time. A value the table has never seen (or a value the parsers
//! could not recover at all) is replaced by the field's fallback value before
//! lookup, so unseen categories never reach the caller as errors. The only
//! failure is a fallback that is itself unencodable, which means the loaded
//! artifacts are inconsistent.

use crate::error::{PricingError, Result};
use crate::features::ExtractedFeatures;
use crate::request::LaptopSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Categorical model inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoricalField {
    #[serde(rename = "manufs")]
    Manufacturer,
    #[serde(rename = "category")]
    Category,
    #[serde(rename = "cpu_brand")]
    CpuBrand,
    #[serde(rename = "cpu_prod")]
    CpuProduct,
    #[serde(rename = "gpu_brand")]
    GpuBrand,
    #[serde(rename = "gpu_prod")]
    GpuProduct,
    #[serde(rename = "os")]
    OperatingSystem,
    #[serde(rename = "os_version")]
    OperatingSystemVersion,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 8] = [
        CategoricalField::Manufacturer,
        CategoricalField::Category,
        CategoricalField::CpuBrand,
        CategoricalField::CpuProduct,
        CategoricalField::GpuBrand,
        CategoricalField::GpuProduct,
        CategoricalField::OperatingSystem,
        CategoricalField::OperatingSystemVersion,
    ];

    /// Key of this field in the encoding-map and fallback artifacts.
    pub fn key(self) -> &'static str {
        use CategoricalField::*;
        match self {
            Manufacturer => "manufs",
            Category => "category",
            CpuBrand => "cpu_brand",
            CpuProduct => "cpu_prod",
            GpuBrand => "gpu_brand",
            GpuProduct => "gpu_prod",
            OperatingSystem => "os",
            OperatingSystemVersion => "os_version",
        }
    }

    /// Name of the model column carrying this field's code.
    pub fn column(self) -> &'static str {
        use CategoricalField::*;
        match self {
            Manufacturer => "manufacturer",
            Category => "category",
            CpuBrand => "cpu_brand",
            CpuProduct => "cpu_product",
            GpuBrand => "gpu_brand",
            GpuProduct => "gpu_product",
            OperatingSystem => "operating_system",
            OperatingSystemVersion => "operating_system_version",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Mapping from training-time category values to integer codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodingTable(HashMap<String, u32>);

impl EncodingTable {
    pub fn new(codes: HashMap<String, u32>) -> Self {
        Self(codes)
    }

    pub fn get(&self, value: &str) -> Option<u32> {
        self.0.get(value).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for EncodingTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Integer codes for every categorical field of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCategories {
    pub manufacturer: u32,
    pub category: u32,
    pub cpu_brand: u32,
    pub cpu_product: u32,
    pub gpu_brand: u32,
    pub gpu_product: u32,
    pub operating_system: u32,
    pub operating_system_version: u32,
}

impl EncodedCategories {
    pub fn get(&self, field: CategoricalField) -> u32 {
        use CategoricalField::*;
        match field {
            Manufacturer => self.manufacturer,
            Category => self.category,
            CpuBrand => self.cpu_brand,
            CpuProduct => self.cpu_product,
            GpuBrand => self.gpu_brand,
            GpuProduct => self.gpu_product,
            OperatingSystem => self.operating_system,
            OperatingSystemVersion => self.operating_system_version,
        }
    }
}

/// Encoder over read-only tables and fallback values.
#[derive(Debug, Clone, Default)]
pub struct CategoryEncoder {
    tables: HashMap<CategoricalField, EncodingTable>,
    fallbacks: HashMap<CategoricalField, String>,
}

impl CategoryEncoder {
    pub fn new(
        tables: HashMap<CategoricalField, EncodingTable>,
        fallbacks: HashMap<CategoricalField, String>,
    ) -> Self {
        Self { tables, fallbacks }
    }

    pub fn table(&self, field: CategoricalField) -> Option<&EncodingTable> {
        self.tables.get(&field)
    }

    pub fn fallback(&self, field: CategoricalField) -> Option<&str> {
        self.fallbacks.get(&field).map(String::as_str)
    }

    /// Check that every field has a table and an encodable fallback.
    pub fn validate(&self) -> Result<()> {
        for field in CategoricalField::ALL {
            self.fallback_code(field)?;
        }
        Ok(())
    }

    fn table_for(&self, field: CategoricalField) -> Result<&EncodingTable> {
        self.tables
            .get(&field)
            .ok_or_else(|| PricingError::MissingEncodingTable {
                field: field.key().to_string(),
            })
    }

    fn fallback_code(&self, field: CategoricalField) -> Result<u32> {
        let table = self.table_for(field)?;
        let fallback = self
            .fallbacks
            .get(&field)
            .ok_or_else(|| PricingError::MissingFallback {
                field: field.key().to_string(),
            })?;
        table
            .get(fallback)
            .ok_or_else(|| PricingError::FallbackNotEncoded {
                field: field.key().to_string(),
                fallback: fallback.clone(),
            })
    }

    /// Encode one value. `None` (an unrecoverable parse) and values absent
    /// from the table both resolve to the fallback's code.
    pub fn encode(&self, field: CategoricalField, value: Option<&str>) -> Result<u32> {
        let table = self.table_for(field)?;
        if let Some(code) = value.and_then(|v| table.get(v)) {
            return Ok(code);
        }
        debug!(
            field = field.key(),
            value = value.unwrap_or("<none>"),
            "Unseen category, substituting fallback"
        );
        self.fallback_code(field)
    }

    /// Encode every categorical field of a request.
    pub fn encode_request(
        &self,
        spec: &LaptopSpec,
        features: &ExtractedFeatures,
    ) -> Result<EncodedCategories> {
        use CategoricalField::*;
        Ok(EncodedCategories {
            manufacturer: self.encode(Manufacturer, Some(spec.manufacturer.as_str()))?,
            category: self.encode(Category, Some(spec.category.as_str()))?,
            cpu_brand: self.encode(CpuBrand, features.cpu.brand.as_deref())?,
            cpu_product: self.encode(CpuProduct, features.cpu.product.as_deref())?,
            gpu_brand: self.encode(GpuBrand, Some(features.gpu.brand.as_str()))?,
            gpu_product: self.encode(GpuProduct, features.gpu.product.as_deref())?,
            operating_system: self.encode(OperatingSystem, Some(spec.operating_system.as_str()))?,
            operating_system_version: self
                .encode(OperatingSystemVersion, Some(spec.operating_system_version.as_str()))?,
        })
    }
}
