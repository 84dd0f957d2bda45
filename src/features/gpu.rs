//! GPU description splitting.

use serde::{Deserialize, Serialize};

/// Brand and product of a GPU description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedGpu {
    pub brand: String,
    /// Everything after the first space; absent for one-word descriptions
    pub product: Option<String>,
}

/// Split a GPU description at its first space: "Nvidia GeForce GTX 1050"
/// becomes brand "Nvidia" and product "GeForce GTX 1050".
pub fn split_gpu(text: &str) -> ParsedGpu {
    match text.split_once(' ') {
        Some((brand, product)) => ParsedGpu {
            brand: brand.to_string(),
            product: Some(product.to_string()),
        },
        None => ParsedGpu {
            brand: text.to_string(),
            product: None,
        },
    }
}
