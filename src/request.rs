//! Request and response records exchanged with the serving layer.
//!
//! Field names on the wire follow the original serving schema
//! (`Manufacturer`, `ScreenSize`, `CPU`, ...).

use crate::error::{PricingError, Result};
use serde::{Deserialize, Serialize};

/// Raw description of one laptop, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaptopSpec {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    /// Accepted for schema compatibility; not a model feature
    #[serde(rename = "ModelName", default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(rename = "Category")]
    pub category: String,
    /// Diagonal in inches
    #[serde(rename = "ScreenSize")]
    pub screen_size: f64,
    #[serde(rename = "ScreenSpec")]
    pub screen_spec: String,
    #[serde(rename = "CPU")]
    pub cpu: String,
    /// Memory in GB
    #[serde(rename = "RAM")]
    pub ram: u32,
    #[serde(rename = "Storage")]
    pub storage: String,
    #[serde(rename = "GPU")]
    pub gpu: String,
    #[serde(rename = "OperatingSystem")]
    pub operating_system: String,
    #[serde(rename = "OperatingSystemVersion")]
    pub operating_system_version: String,
    /// Weight in kg
    #[serde(rename = "Weight")]
    pub weight: f64,
}

impl LaptopSpec {
    /// Reject numeric inputs that cannot produce a meaningful feature.
    ///
    /// A zero screen size is not rejected here; it surfaces as a division
    /// error when the resolution density is derived.
    pub fn validate(&self) -> Result<()> {
        if !self.screen_size.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "ScreenSize must be finite, got {}",
                self.screen_size
            )));
        }
        if !self.weight.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "Weight must be finite, got {}",
                self.weight
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| PricingError::Serialization(format!("JSON deserialization error: {}", e)))
    }
}

/// Price estimate returned to the serving layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub predicted_price: f64,
}

impl PriceEstimate {
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| PricingError::Serialization(format!("JSON serialization error: {}", e)))
    }
}
