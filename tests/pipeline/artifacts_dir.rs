use laptop_price::artifacts::{ENCODING_MAPS_FILE, FALLBACKS_FILE, FEATURES_FILE};
use laptop_price::{CategoricalField, ErrorKind, ModelArtifacts, PricingError};

use crate::common::temp_artifacts;

#[test]
fn copied_artifacts_load() {
    let dir = temp_artifacts(|_, text| text);
    let a = ModelArtifacts::load(dir.path()).unwrap();
    assert_eq!(a.feature_columns().len(), 24);
    assert_eq!(a.encoder().fallback(CategoricalField::OperatingSystem), Some("Other"));
}

#[test]
fn unencodable_fallback_names_the_field() {
    let dir = temp_artifacts(|name, text| {
        if name == FALLBACKS_FILE {
            text.replace(r#""gpu_prod": "Other""#, r#""gpu_prod": "Voodoo2""#)
        } else {
            text
        }
    });
    let err = ModelArtifacts::load(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationError);
    assert!(err.to_string().contains("'gpu_prod'"), "{}", err);
    assert!(err.to_string().contains("Voodoo2"), "{}", err);
}

#[test]
fn missing_fallback_entry_is_configuration_error() {
    let dir = temp_artifacts(|name, text| {
        if name == FALLBACKS_FILE {
            text.replace(r#"  "os_version": "Other"
"#, "")
                .replace(r#""os": "Other","#, r#""os": "Other""#)
        } else {
            text
        }
    });
    let err = ModelArtifacts::load(dir.path()).unwrap_err();
    assert!(matches!(err, PricingError::MissingFallback { ref field } if field == "os_version"));
}

#[test]
fn column_list_must_match_assembled_columns() {
    let dir = temp_artifacts(|name, text| {
        if name == FEATURES_FILE {
            text.replace(r#""weight","#, r#""weight", "battery_wh","#)
        } else {
            text
        }
    });
    let err = ModelArtifacts::load(dir.path()).unwrap_err();
    assert!(matches!(err, PricingError::MissingColumn { ref column } if column == "battery_wh"));
}

#[test]
fn malformed_json_is_serialization_error() {
    let dir = temp_artifacts(|name, text| {
        if name == ENCODING_MAPS_FILE {
            text[..text.len() / 2].to_string()
        } else {
            text
        }
    });
    let err = ModelArtifacts::load(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SerializationError);
    assert!(err.to_string().contains(ENCODING_MAPS_FILE));
}

#[test]
fn missing_file_is_io_error() {
    let dir = temp_artifacts(|_, text| text);
    std::fs::remove_file(dir.path().join(FEATURES_FILE)).unwrap();
    let err = ModelArtifacts::load(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoError);
}
