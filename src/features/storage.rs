//! Storage description parsing.
//!
//! A storage string describes one drive, or several joined by a literal `+`
//! (e.g. "128GB SSD + 1TB HDD"). Each drive contributes its size to the
//! bucket of its format.

use crate::features::patterns::{parse_decimal, RE_STORAGE_FORMAT, RE_STORAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Physical drive format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveFormat {
    Hdd,
    Ssd,
    FlashStorage,
    Hybrid,
    Other,
}

impl DriveFormat {
    fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_uppercase().as_str() {
            "HDD" => DriveFormat::Hdd,
            "SSD" => DriveFormat::Ssd,
            "FLASH STORAGE" => DriveFormat::FlashStorage,
            "HYBRID" => DriveFormat::Hybrid,
            _ => DriveFormat::Other,
        }
    }
}

/// One drive segment of a storage description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveSpec {
    pub size_gb: f64,
    pub format: DriveFormat,
}

/// Aggregated storage features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedStorage {
    pub total_gb: f64,
    pub ssd_gb: f64,
    pub hdd_gb: f64,
    pub flash_gb: f64,
    pub hybrid_gb: f64,
    pub other_gb: f64,
    /// Number of drive segments, or 0 when no size was recognized anywhere
    pub disk_count: u32,
}

fn unit_multiplier(unit: &str) -> f64 {
    if unit.eq_ignore_ascii_case("TB") {
        1000.0
    } else {
        1.0
    }
}

/// Parse a single, already trimmed drive segment.
pub fn parse_drive(segment: &str) -> DriveSpec {
    let size_gb = RE_STORAGE_SIZE
        .captures(segment)
        .and_then(|caps| {
            parse_decimal(&caps["size"]).map(|size| size * unit_multiplier(&caps["unit"]))
        })
        .unwrap_or(0.0);

    let format = RE_STORAGE_FORMAT
        .find(segment)
        .map(|m| DriveFormat::from_keyword(m.as_str()))
        .unwrap_or(DriveFormat::Other);

    DriveSpec { size_gb, format }
}

/// Parse a free-text storage description into per-format totals.
pub fn parse_storage(text: &str) -> ParsedStorage {
    let drives: Vec<DriveSpec> = text.split('+').map(|s| parse_drive(s.trim())).collect();

    let sum_of = |format: DriveFormat| -> f64 {
        drives
            .iter()
            .filter(|d| d.format == format)
            .fold(0.0, |acc, d| acc + d.size_gb)
    };

    let ssd_gb = sum_of(DriveFormat::Ssd);
    let hdd_gb = sum_of(DriveFormat::Hdd);
    let flash_gb = sum_of(DriveFormat::FlashStorage);
    let hybrid_gb = sum_of(DriveFormat::Hybrid);
    let other_gb = sum_of(DriveFormat::Other);
    let total_gb = ssd_gb + hdd_gb + flash_gb + hybrid_gb + other_gb;
    // A string without any recognizable size counts as no drives at all.
    let disk_count = if total_gb > 0.0 { drives.len() as u32 } else { 0 };

    ParsedStorage {
        total_gb,
        ssd_gb,
        hdd_gb,
        flash_gb,
        hybrid_gb,
        other_gb,
        disk_count,
    }
}
