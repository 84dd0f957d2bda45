#![no_main]
use libfuzzer_sys::fuzz_target;

use laptop_price::{ExtractedFeatures, LaptopSpec};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(spec) = LaptopSpec::from_json_str(text) {
            let _ = spec.validate();
            let _ = ExtractedFeatures::from_spec(&spec);
        }
    }
});
