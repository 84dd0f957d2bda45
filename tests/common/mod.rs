//! Common test utilities and helpers.
//!
//! Shared fixtures for the integration tests: sample artifact and request
//! locations, a stub model, and temporary artifact directories.

use laptop_price::{FeatureVector, LaptopSpec, ModelArtifacts};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory of the sample artifacts shipped with the crate
pub const SAMPLE_ARTIFACTS: &str = "samples/artifacts";

/// Get the full path to a sample request
pub fn sample_request_path<P: AsRef<Path>>(name: P) -> PathBuf {
    Path::new("samples/requests").join(name)
}

/// Load a sample request by file name
pub fn load_request(name: &str) -> LaptopSpec {
    let text = fs::read_to_string(sample_request_path(name)).expect("read sample request");
    LaptopSpec::from_json_str(&text).expect("parse sample request")
}

/// Load the sample artifacts
pub fn sample_artifacts() -> ModelArtifacts {
    ModelArtifacts::load(SAMPLE_ARTIFACTS).expect("load sample artifacts")
}

/// Model returning a fixed log-space value regardless of input
pub fn fixed_model(log_price: f64) -> impl Fn(&FeatureVector) -> f64 + Send + Sync {
    move |_fv: &FeatureVector| log_price
}

/// Copy the sample artifacts into a temporary directory, applying `edit` to
/// the contents of each file before writing.
pub fn temp_artifacts(edit: impl Fn(&str, String) -> String) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for entry in fs::read_dir(SAMPLE_ARTIFACTS).expect("list sample artifacts") {
        let path = entry.expect("dir entry").path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("utf-8 file name")
            .to_string();
        let text = fs::read_to_string(&path).expect("read artifact");
        fs::write(dir.path().join(&name), edit(&name, text)).expect("write artifact");
    }
    dir
}

/// Compare feature values treating NaN as equal to NaN
pub fn assert_values_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "vector length");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "index {}: expected NaN, got {}", i, a);
        } else {
            assert_eq!(a, e, "index {}", i);
        }
    }
}
