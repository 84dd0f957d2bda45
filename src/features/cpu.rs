//! CPU description parsing.
//!
//! A CPU string is only understood when a known brand and a GHz clock can be
//! matched together; anything less yields an empty [`ParsedCpu`].

use crate::features::patterns::{parse_decimal, RE_CPU_BRAND_CLOCK, RE_CPU_CORES};
use serde::{Deserialize, Serialize};

/// Typed view of a CPU description.
///
/// Either `brand`, `product` and `clock_ghz` are all present, or every field
/// (including `core_count`) is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedCpu {
    /// Brand exactly as written in the input (e.g. "Intel", "amd")
    pub brand: Option<String>,
    /// Product span between the brand and the clock, trimmed
    pub product: Option<String>,
    pub clock_ghz: Option<f64>,
    pub core_count: Option<u8>,
}

impl ParsedCpu {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
    }
}

/// Map a core label to a core count. Digit labels have no entry.
fn core_count_for_label(label: &str) -> Option<u8> {
    match label.to_ascii_lowercase().as_str() {
        "dual" => Some(2),
        "quad" => Some(4),
        "hexa" => Some(6),
        "octa" => Some(8),
        "deca" => Some(10),
        "dodeca" => Some(12),
        "hexadeca" => Some(16),
        _ => None,
    }
}

/// Parse a free-text CPU description.
pub fn parse_cpu(text: &str) -> ParsedCpu {
    let Some(caps) = RE_CPU_BRAND_CLOCK.captures(text) else {
        return ParsedCpu::default();
    };
    let Some(clock) = parse_decimal(&caps["ghz"]) else {
        return ParsedCpu::default();
    };

    let product = caps["product"].trim();
    let core_count = RE_CPU_CORES
        .captures(product)
        .and_then(|c| core_count_for_label(&c["label"]));

    ParsedCpu {
        brand: Some(caps["brand"].to_string()),
        product: Some(product.to_string()),
        clock_ghz: Some(clock),
        core_count,
    }
}
