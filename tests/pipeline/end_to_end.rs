use std::sync::Arc;

use laptop_price::{
    ErrorKind, LaptopSpec, MissingValuePolicy, PipelineConfig, PricePipeline, PricingError,
};

use crate::common::{assert_values_eq, fixed_model, load_request, sample_artifacts, SAMPLE_ARTIFACTS};

fn pipeline(log_price: f64) -> PricePipeline {
    PricePipeline::new(
        Arc::new(sample_artifacts()),
        Arc::new(fixed_model(log_price)),
        PipelineConfig::default(),
    )
    .expect("pipeline")
}

#[test]
fn known_request_reproduces_encoded_vector_and_price() {
    let p = pipeline(7.0);
    let spec = load_request("dell_inspiron.json");

    let fv = p.featurize(&spec).expect("featurize");
    assert_eq!(fv.columns()[0], "manufacturer");
    assert_eq!(fv.columns()[23], "operating_system_version");
    assert_values_eq(
        fv.values(),
        &[
            4.0,  // manufacturer: Dell
            3.0,  // category: Notebook
            8.0,  // ram
            2.02, // weight
            0.0,  // ips
            0.0,  // 4k
            0.0,  // touchscreen
            0.0,  // retina
            2202.9071700822983 / 15.6,
            256.0, // total_gb
            256.0, // ssd_gb
            0.0,
            0.0,
            0.0,
            0.0,
            1.0, // disk_count
            2.0, // cpu_brand: Intel
            3.0, // cpu_product: Core i5 8250U
            1.6, // cpu_ghz
            f64::NAN,
            2.0, // gpu_brand: Intel
            2.0, // gpu_product: UHD Graphics 620
            1.0, // os: Windows
            1.0, // os_version: 10
        ],
    );

    let est = p.predict(&spec).expect("predict");
    assert_eq!(est.predicted_price, 1095.63);
    assert_eq!(est.to_json_string().unwrap(), r#"{"predicted_price":1095.63}"#);
}

#[test]
fn dual_drive_gaming_request() {
    let p = pipeline(0.0);
    let fv = p.featurize(&load_request("gaming_dual_drive.json")).unwrap();
    assert_eq!(fv.get("manufacturer"), Some(7.0));
    assert_eq!(fv.get("ips"), Some(1.0));
    assert_eq!(fv.get("total_gb"), Some(1152.0));
    assert_eq!(fv.get("hdd_gb"), Some(1000.0));
    assert_eq!(fv.get("disk_count"), Some(2.0));
    assert_eq!(fv.get("cpu_product"), Some(4.0));
    assert_eq!(fv.get("gpu_product"), Some(4.0));
    assert_eq!(p.predict(&load_request("gaming_dual_drive.json")).unwrap().predicted_price, 0.0);
}

#[test]
fn unseen_vocabulary_routes_through_fallbacks() {
    let p = pipeline(6.0);
    let spec = load_request("unknown_vocabulary.json");
    let fv = p.featurize(&spec).unwrap();
    for column in [
        "manufacturer",
        "category",
        "cpu_brand",
        "cpu_product",
        "gpu_brand",
        "gpu_product",
        "operating_system",
        "operating_system_version",
    ] {
        assert_eq!(fv.get(column), Some(0.0), "column {}", column);
    }
    assert_eq!(fv.get("disk_count"), Some(0.0));
    assert!(fv.get("cpu_ghz").unwrap().is_nan());
    assert!(fv.get("screen_resolution").unwrap().is_nan());
    // Still priced: unseen values are never surfaced as errors
    assert_eq!(p.predict(&spec).unwrap().predicted_price, 402.43);
}

#[test]
fn featurizing_twice_is_identical() {
    let p = pipeline(1.0);
    let spec = load_request("gaming_dual_drive.json");
    let a = serde_json::to_string(&p.featurize(&spec).unwrap()).unwrap();
    let b = serde_json::to_string(&p.featurize(&spec.clone()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_screen_size_fails_with_division_reason() {
    let p = pipeline(7.0);
    let spec = LaptopSpec {
        screen_size: 0.0,
        ..load_request("dell_inspiron.json")
    };
    let err = p.predict(&spec).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionError);
    assert_eq!(err.kind().to_string(), "division_error");
}

#[test]
fn reject_policy_surfaces_missing_numeric_as_configuration_error() {
    let config = PipelineConfig::default().with_missing_values(MissingValuePolicy::Reject);
    let p = PricePipeline::new(
        Arc::new(sample_artifacts()),
        Arc::new(fixed_model(7.0)),
        config,
    )
    .unwrap();
    let err = p.predict(&load_request("dell_inspiron.json")).unwrap_err();
    assert!(matches!(err, PricingError::MissingValue { ref column } if column == "cpu_core_count"));
    assert!(err.is_fatal());
}

#[test]
fn non_finite_model_output_is_model_error() {
    let p = pipeline(f64::NAN);
    let err = p.predict(&load_request("dell_inspiron.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ModelError);
}

#[test]
fn load_from_config_directory() {
    let config = PipelineConfig::default().with_artifacts_dir(SAMPLE_ARTIFACTS);
    let p = PricePipeline::load(config, Arc::new(fixed_model(7.0))).unwrap();
    assert_eq!(p.config().price_decimals, 2);
    assert_eq!(
        p.predict(&load_request("dell_inspiron.json")).unwrap().predicted_price,
        1095.63
    );
}
