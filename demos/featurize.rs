// Print the model input and price for request files, using a toy model.
//
//   cargo run --example featurize -- samples/artifacts samples/requests/*.json
use anyhow::{bail, Context, Result};
use std::fs;
use std::sync::Arc;

use laptop_price::logging::init_tracing;
use laptop_price::{FeatureVector, LaptopSpec, PipelineConfig, PricePipeline};

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(artifacts_dir) = args.next() else {
        bail!("usage: featurize <artifacts-dir> <request.json>...");
    };

    // Stand-in for a trained model: log1p of a RAM- and storage-driven price
    let model = |fv: &FeatureVector| {
        let ram = fv.get("ram").unwrap_or(0.0);
        let storage = fv.get("total_gb").unwrap_or(0.0);
        (300.0 + 40.0 * ram + 0.2 * storage).ln_1p()
    };
    let config = PipelineConfig::default().with_artifacts_dir(&artifacts_dir);
    let pipeline = PricePipeline::load(config, Arc::new(model))
        .with_context(|| format!("loading artifacts from {}", artifacts_dir))?;

    for path in args {
        let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
        let spec = LaptopSpec::from_json_str(&text).with_context(|| format!("parsing {}", path))?;

        println!("=== {} ===", path);
        match pipeline.featurize(&spec) {
            Ok(features) => {
                for (column, value) in features.iter() {
                    println!("  {:<26} {}", column, value);
                }
            }
            Err(e) => {
                println!("  failed ({}): {}", e.kind(), e);
                continue;
            }
        }
        let estimate = pipeline.predict(&spec)?;
        println!("  -> {}", estimate.to_json_string()?);
    }
    Ok(())
}
