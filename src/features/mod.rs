//! Feature extraction from free-text hardware descriptions.
//!
//! Each parser is a pure function of its input string. None of them fail:
//! text outside the recognized vocabulary produces an empty or zeroed
//! result, and downstream encoding decides what an empty value means.

pub mod cpu;
pub mod gpu;
pub mod patterns;
pub mod screen;
pub mod storage;

pub use cpu::{parse_cpu, ParsedCpu};
pub use gpu::{split_gpu, ParsedGpu};
pub use screen::{parse_screen, ParsedScreen};
pub use storage::{parse_drive, parse_storage, DriveFormat, DriveSpec, ParsedStorage};

use crate::request::LaptopSpec;
use serde::{Deserialize, Serialize};

/// Parser outputs for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFeatures {
    pub cpu: ParsedCpu,
    pub storage: ParsedStorage,
    pub screen: ParsedScreen,
    pub gpu: ParsedGpu,
}

impl ExtractedFeatures {
    /// Run every parser over the free-text fields of a request.
    pub fn from_spec(spec: &LaptopSpec) -> Self {
        Self {
            cpu: parse_cpu(&spec.cpu),
            storage: parse_storage(&spec.storage),
            screen: parse_screen(&spec.screen_spec),
            gpu: split_gpu(&spec.gpu),
        }
    }
}
