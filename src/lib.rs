//! Laptop price estimation from free-text hardware specifications.
//!
//! Raw request strings are parsed into typed features, categorical values are
//! encoded through the tables fitted at training time, and the result is
//! assembled into the column order a trained regression model expects. The
//! model itself is supplied by the caller through [`predict::PriceModel`].

pub mod artifacts;
pub mod assemble;
pub mod config;
pub mod encoding;
pub mod error;
pub mod features;
pub mod logging;
pub mod predict;
pub mod request;

pub use artifacts::ModelArtifacts;
pub use assemble::{FeatureAssembler, FeatureVector};
pub use config::{MissingValuePolicy, PipelineConfig};
pub use encoding::{CategoricalField, CategoryEncoder, EncodingTable};
pub use error::{ErrorKind, PricingError, Result};
pub use features::ExtractedFeatures;
pub use predict::{inverse_log1p, PriceModel, PricePipeline};
pub use request::{LaptopSpec, PriceEstimate};
