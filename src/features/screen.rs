//! Screen description parsing: marketing keyword flags and pixel diagonal.

use crate::features::patterns::{parse_decimal, RE_SCREEN_KEYWORD, RE_SCREEN_RESOLUTION};
use serde::{Deserialize, Serialize};

/// Typed view of a screen description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedScreen {
    pub ips: bool,
    pub uhd_4k: bool,
    pub touchscreen: bool,
    pub retina: bool,
    /// √(width² + height²) of the pixel grid, when dimensions were found
    pub diagonal_pixels: Option<f64>,
}

/// Parse a free-text screen description.
pub fn parse_screen(text: &str) -> ParsedScreen {
    let mut screen = ParsedScreen::default();

    for caps in RE_SCREEN_KEYWORD.captures_iter(text) {
        match caps["keyword"].to_ascii_uppercase().as_str() {
            "IPS" => screen.ips = true,
            "4K" => screen.uhd_4k = true,
            "TOUCHSCREEN" => screen.touchscreen = true,
            "RETINA" => screen.retina = true,
            _ => {}
        }
    }

    screen.diagonal_pixels = RE_SCREEN_RESOLUTION.captures(text).and_then(|caps| {
        let width = parse_decimal(&caps["width"])?;
        let height = parse_decimal(&caps["height"])?;
        Some((width * width + height * height).sqrt())
    });

    screen
}
