//! Precompiled regex patterns for hardware specification strings.
//!
//! The `regex` crate guarantees linear-time matching, so none of these can
//! backtrack catastrophically on hostile input. Alternations follow
//! leftmost-first semantics: earlier alternatives win at the same position.

use once_cell::sync::Lazy;
use regex::Regex;

// CPU: brand, lazily matched product span, then a clock suffixed with GHz
pub static RE_CPU_BRAND_CLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<brand>Intel|AMD|Apple|Samsung)\s+(?P<product>.*?)(?P<ghz>\d+\.?\d*)\s*GHz")
        .expect("valid cpu brand/clock regex")
});

// Core count label inside an isolated CPU product span, e.g. "Quad Core"
pub static RE_CPU_CORES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?P<label>Dual|Quad|Hexa|Octa|Deca|Dodeca|Hexadeca|\d{1,2})\s+Core\b")
        .expect("valid cpu core regex")
});

// Storage: quantity and unit of one drive
pub static RE_STORAGE_SIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<size>\d+\.?\d*)\s*(?P<unit>GB|TB)").expect("valid storage size regex")
});

// Storage: drive format keyword
pub static RE_STORAGE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<format>HDD|SSD|Flash Storage|Hybrid)").expect("valid storage format regex")
});

// Screen: marketing keywords as whole words
pub static RE_SCREEN_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?P<keyword>IPS|4K|Touchscreen|Retina)\b")
        .expect("valid screen keyword regex")
});

// Screen: pixel dimensions, e.g. 1920x1080 or 2560 × 1600 (case-sensitive on purpose)
pub static RE_SCREEN_RESOLUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<width>\d{3,4})\s*[xX×]\s*(?P<height>\d{3,4})")
        .expect("valid screen resolution regex")
});

// Zero digit of every Unicode `Nd` run; each run holds the ten digits 0-9
const DECIMAL_ZEROS: [u32; 68] = [
    0x30, 0x660, 0x6F0, 0x7C0, 0x966, 0x9E6, 0xA66, 0xAE6, 0xB66, 0xBE6, 0xC66, 0xCE6, 0xD66,
    0xDE6, 0xE50, 0xED0, 0xF20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90,
    0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0,
    0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0,
    0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60,
    0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0,
    0x1E950, 0x1FBF0,
];

fn decimal_digit(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    let cp = c as u32;
    let run = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp).checked_sub(1)?;
    let d = cp - DECIMAL_ZEROS[run];
    (d < 10).then_some(d)
}

/// Parse a number captured by a `\d` group. `\d` matches any Unicode
/// decimal digit, so digits are folded to ASCII before conversion.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let ascii = text
        .chars()
        .map(|c| match c {
            '.' => Some('.'),
            _ => decimal_digit(c).and_then(|d| char::from_digit(d, 10)),
        })
        .collect::<Option<String>>()?;
    ascii.parse().ok()
}
