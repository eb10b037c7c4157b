//! Label patterns used to infer which way a camera faces.

use crate::types::FacingMode;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Labels of rear-facing cameras.
    pub static ref REAR_FACING_PATTERN: Regex =
        Regex::new(r"(?i)rear|back|environment").expect("rear-facing pattern is valid");
    /// Labels of front-facing cameras.
    pub static ref FRONT_FACING_PATTERN: Regex =
        Regex::new(r"(?i)front|user|face").expect("front-facing pattern is valid");
}

/// Label pattern for the requested facing mode.
///
/// Only `environment` selects the rear pattern; every other value, including
/// unknown strings, selects the front pattern.
pub fn facing_mode_pattern(facing_mode: &FacingMode) -> &'static Regex {
    if facing_mode.is_environment() {
        &REAR_FACING_PATTERN
    } else {
        &FRONT_FACING_PATTERN
    }
}
