//! Paste datasheet JSON parsing.
//!
//! The paste specification serializes with tuple-encoded bands:
//!
//! ```json
//! {
//!   "name": "SAC305",
//!   "liquidus_temperature_c": 217.0,
//!   "peak_temperature_range": [235.0, 250.0],
//!   "preheat_target_c": 150.0,
//!   "soak_temperature_range": [160.0, 180.0],
//!   "soak_duration_range_s": [60.0, 120.0],
//!   "time_above_liquidus_range_s": [45.0, 90.0],
//!   "max_ramp_rate_c_per_s": 3.0,
//!   "cooling_rate_range_c_per_s": [2.0, 4.0]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::domain::PasteSpecification;

/// Parses a paste specification from a JSON file.
pub fn parse_paste_json(path: &Path) -> Result<PasteSpecification> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read paste file {}", path.display()))?;
    parse_paste_json_str(&raw)
        .with_context(|| format!("Failed to parse paste file {}", path.display()))
}

/// Parses a paste specification from a JSON string.
pub fn parse_paste_json_str(json: &str) -> Result<PasteSpecification> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let paste: PasteSpecification = serde_path_to_error::deserialize(&mut deserializer)
        .context("Invalid paste specification JSON")?;
    Ok(paste)
}
