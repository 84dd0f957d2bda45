//! End-to-end pricing: parse, encode, assemble, predict, back-transform.
//!
//! The pipeline holds only read-only state (artifacts, assembler, model
//! handle) and can be shared across threads; each request is an independent
//! single pass.

use crate::artifacts::ModelArtifacts;
use crate::assemble::{FeatureAssembler, FeatureVector};
use crate::config::PipelineConfig;
use crate::encoding::CategoryEncoder;
use crate::error::{PricingError, Result};
use crate::features::ExtractedFeatures;
use crate::log_error;
use crate::request::{LaptopSpec, PriceEstimate};
use crate::span_trace;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// A trained regression model predicting log1p(price).
pub trait PriceModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64>;
}

impl<F> PriceModel for F
where
    F: Fn(&FeatureVector) -> f64 + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        Ok(self(features))
    }
}

/// Undo the training-time `log(1 + price)` transform and round to
/// `decimals` places, ties to even.
pub fn inverse_log1p(raw: f64, decimals: u32) -> Result<f64> {
    if !raw.is_finite() {
        return Err(PricingError::Model(format!("non-finite model output {}", raw)));
    }
    let price = raw.exp_m1();
    if !price.is_finite() {
        return Err(PricingError::Model(format!(
            "model output {} overflows the price range",
            raw
        )));
    }
    let scale = 10f64.powi(decimals as i32);
    let rounded = (price * scale).round_ties_even() / scale;
    if !rounded.is_finite() {
        return Err(PricingError::Model(format!(
            "model output {} overflows the price range at {} decimals",
            raw, decimals
        )));
    }
    Ok(rounded)
}

/// Parse → encode → assemble → predict, for one request or a batch.
pub struct PricePipeline {
    artifacts: Arc<ModelArtifacts>,
    assembler: FeatureAssembler,
    model: Arc<dyn PriceModel>,
    config: PipelineConfig,
}

impl std::fmt::Debug for PricePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricePipeline")
            .field("columns", &self.assembler.expected_columns().len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PricePipeline {
    pub fn new(
        artifacts: Arc<ModelArtifacts>,
        model: Arc<dyn PriceModel>,
        config: PipelineConfig,
    ) -> Result<Self> {
        let assembler = FeatureAssembler::new(
            artifacts.feature_columns().to_vec(),
            config.missing_values,
        )?;
        Ok(Self {
            artifacts,
            assembler,
            model,
            config,
        })
    }

    /// Load artifacts from `config.artifacts_dir` and build a pipeline.
    pub fn load(config: PipelineConfig, model: Arc<dyn PriceModel>) -> Result<Self> {
        let artifacts = ModelArtifacts::load(&config.artifacts_dir)?;
        Self::new(Arc::new(artifacts), model, config)
    }

    pub fn encoder(&self) -> &CategoryEncoder {
        self.artifacts.encoder()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build the model input for one request without running the model.
    pub fn featurize(&self, spec: &LaptopSpec) -> Result<FeatureVector> {
        spec.validate()?;
        let features = ExtractedFeatures::from_spec(spec);
        debug!(
            cpu_parsed = !features.cpu.is_empty(),
            disks = features.storage.disk_count,
            resolution = features.screen.diagonal_pixels.is_some(),
            "Features extracted"
        );
        let codes = self.encoder().encode_request(spec, &features)?;
        self.assembler.assemble(spec, &features, &codes)
    }

    /// Price one request.
    pub fn predict(&self, spec: &LaptopSpec) -> Result<PriceEstimate> {
        let span = span_trace!("predict", manufacturer = %spec.manufacturer);
        let _guard = span.enter();

        let run = || -> Result<PriceEstimate> {
            let features = self.featurize(spec)?;
            let raw = self.model.predict(&features)?;
            let predicted_price = inverse_log1p(raw, self.config.price_decimals)?;
            debug!(raw, predicted_price, "Prediction complete");
            Ok(PriceEstimate { predicted_price })
        };
        run().map_err(|e| log_error!(e))
    }

    /// Price independent requests, in parallel for large batches. Results
    /// are in input order; a failing request does not affect the others.
    pub fn predict_batch(&self, specs: &[LaptopSpec]) -> Vec<Result<PriceEstimate>> {
        info!(requests = specs.len(), "Pricing batch");
        if specs.len() >= self.config.parallel_threshold {
            specs.par_iter().map(|s| self.predict(s)).collect()
        } else {
            specs.iter().map(|s| self.predict(s)).collect()
        }
    }
}
