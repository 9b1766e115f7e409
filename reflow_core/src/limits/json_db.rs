//! MPN-keyed thermal limits database loaded from JSON.
//!
//! New limit format: one record per manufacturer part number with a single
//! ramp bound (applied to both directions) plus soak and time-above-liquidus
//! minimums. The JSON file is a flat map:
//!
//! ```json
//! {
//!   "STM32F407VGT6": {
//!     "max_temp_c": 250.0,
//!     "max_ramp_rate_c_per_s": 3.0,
//!     "min_soak_time_s": 60.0,
//!     "min_time_above_liquidus_s": 40.0,
//!     "notes": "LQFP100"
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use crate::core::domain::{Component, ThermalEnvelope};
use crate::limits::repository::{ComponentLimit, LimitsRepository};

/// One MPN record as stored in the database file.
#[derive(Debug, Clone, Deserialize)]
pub struct MpnRecord {
    pub max_temp_c: f64,
    pub max_ramp_rate_c_per_s: f64,
    pub min_soak_time_s: f64,
    pub min_time_above_liquidus_s: f64,
    #[serde(default)]
    pub notes: String,
}

impl From<&MpnRecord> for ThermalEnvelope {
    fn from(record: &MpnRecord) -> Self {
        // A single datasheet ramp bound constrains both directions.
        ThermalEnvelope {
            max_temperature_c: record.max_temp_c,
            max_ramp_up_c_per_s: record.max_ramp_rate_c_per_s,
            max_ramp_down_c_per_s: record.max_ramp_rate_c_per_s,
            min_soak_time_s: Some(record.min_soak_time_s),
            min_time_above_liquidus_s: Some(record.min_time_above_liquidus_s),
        }
    }
}

/// MPN-keyed limits database.
#[derive(Debug, Clone)]
pub struct JsonLimitsDb {
    records: HashMap<String, MpnRecord>,
}

impl JsonLimitsDb {
    /// Loads the database from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read limits database {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse limits database {}", path.display()))
    }

    /// Parses the database from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let records: HashMap<String, MpnRecord> =
            serde_path_to_error::deserialize(&mut deserializer)
                .context("Invalid limits database JSON")?;

        info!("loaded {} component specs", records.len());
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LimitsRepository for JsonLimitsDb {
    fn lookup(&self, component: &Component) -> Option<ComponentLimit> {
        self.records.get(&component.mpn).map(|record| ComponentLimit {
            mpn: component.mpn.clone(),
            envelope: ThermalEnvelope::from(record),
            notes: record.notes.clone(),
        })
    }
}
