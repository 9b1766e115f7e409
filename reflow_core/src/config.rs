//! Planner policy configuration file support.
//!
//! Reads the planning margins from a TOML file so the safety policy can be
//! tuned per line without a rebuild:
//!
//! ```toml
//! [planner]
//! rate_margin = 0.05
//! peak_margin_c = 5.0
//! ambient_c = 25.0
//! cooldown_exit_c = 100.0
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::algorithms::planning::PlannerPolicy;
use crate::core::domain::AMBIENT_TEMP_C;

/// Planner configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSettings {
    #[serde(default)]
    pub planner: PolicySection,
}

/// Policy knobs; every field falls back to the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySection {
    #[serde(default = "default_rate_margin")]
    pub rate_margin: f64,
    #[serde(default = "default_peak_margin_c")]
    pub peak_margin_c: f64,
    #[serde(default = "default_ambient_c")]
    pub ambient_c: f64,
    #[serde(default = "default_cooldown_exit_c")]
    pub cooldown_exit_c: f64,
}

fn default_rate_margin() -> f64 {
    0.05
}

fn default_peak_margin_c() -> f64 {
    5.0
}

fn default_ambient_c() -> f64 {
    AMBIENT_TEMP_C
}

fn default_cooldown_exit_c() -> f64 {
    100.0
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            rate_margin: default_rate_margin(),
            peak_margin_c: default_peak_margin_c(),
            ambient_c: default_ambient_c(),
            cooldown_exit_c: default_cooldown_exit_c(),
        }
    }
}

impl PlannerSettings {
    /// Loads settings from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read planner config {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("Failed to parse planner config {}", path.display()))
    }

    /// Parses settings from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Invalid planner configuration")
    }

    /// Converts the settings into a planner policy.
    pub fn policy(&self) -> PlannerPolicy {
        PlannerPolicy {
            rate_margin: self.planner.rate_margin,
            peak_margin_c: self.planner.peak_margin_c,
            ambient_c: self.planner.ambient_c,
            cooldown_exit_c: self.planner.cooldown_exit_c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_policy() {
        let settings = PlannerSettings::from_toml_str("").unwrap();
        assert_eq!(settings.policy(), PlannerPolicy::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let settings =
            PlannerSettings::from_toml_str("[planner]\npeak_margin_c = 10.0\n").unwrap();
        let policy = settings.policy();
        assert_eq!(policy.peak_margin_c, 10.0);
        assert_eq!(policy.rate_margin, 0.05);
        assert_eq!(policy.ambient_c, 25.0);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(PlannerSettings::from_toml_str("[planner\nrate_margin = x").is_err());
    }
}
