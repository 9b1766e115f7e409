//! Verification of reflow profiles against thermal constraints.
//!
//! This module walks a planned (or externally supplied) profile, derives
//! ramp rates and time-above-liquidus, and checks each against the
//! aggregated envelope and the paste tolerances. Checks run independently,
//! so a single call reports every problem found rather than only the first.
//! A profile that merely fails its constraints is the normal
//! `passed = false` path, never an error.

use std::collections::BTreeMap;

use log::info;

use crate::algorithms::interpolation::time_above_liquidus;
use crate::core::domain::{PasteSpecification, Phase, ReflowProfile, ThermalEnvelope};

/// Absolute tolerance for rate and dwell comparisons, so a rate that was
/// planned as `Δtemp / duration` and re-derived the same way cannot flip a
/// check at the boundary.
const TOLERANCE: f64 = 1e-9;

/// Fraction of a ramp cap above which a near-limit warning is raised.
const NEAR_LIMIT_FRACTION: f64 = 0.95;

/// Constraint a verification finding refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckCode {
    PeakCeiling,
    RampUpRate,
    RampDownRate,
    TimeAboveLiquidus,
    SoakDuration,
    PeakRange,
}

impl CheckCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCode::PeakCeiling => "peak_ceiling",
            CheckCode::RampUpRate => "ramp_up_rate",
            CheckCode::RampDownRate => "ramp_down_rate",
            CheckCode::TimeAboveLiquidus => "time_above_liquidus",
            CheckCode::SoakDuration => "soak_duration",
            CheckCode::PeakRange => "peak_range",
        }
    }
}

/// A hard constraint breach. Any violation fails the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub code: CheckCode,
    pub message: String,
    pub measured_value: f64,
    pub limit_value: f64,
}

/// A soft advisory finding. Warnings never affect `passed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub code: CheckCode,
    pub message: String,
    pub measured_value: f64,
    pub limit_value: f64,
}

/// Result of verifying one profile.
///
/// `passed` is true iff no violations were recorded. The metrics map always
/// carries `peak_temp_c`, `time_above_liquidus_s`, `max_ramp_up_observed`,
/// `max_ramp_down_observed`, and `total_duration_s`, pass or fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub passed: bool,
    pub violations: Vec<Violation>,
    pub warnings: Vec<Warning>,
    pub metrics: BTreeMap<String, f64>,
}

impl ValidationResult {
    /// Creates an empty, passing result.
    pub fn new() -> Self {
        Self {
            passed: true,
            violations: Vec::new(),
            warnings: Vec::new(),
            metrics: BTreeMap::new(),
        }
    }

    /// Records a violation and marks the result as failed.
    pub fn add_violation(
        &mut self,
        code: CheckCode,
        message: String,
        measured_value: f64,
        limit_value: f64,
    ) {
        self.passed = false;
        self.violations.push(Violation { code, message, measured_value, limit_value });
    }

    /// Records a warning without affecting `passed`.
    pub fn add_warning(
        &mut self,
        code: CheckCode,
        message: String,
        measured_value: f64,
        limit_value: f64,
    ) {
        self.warnings.push(Warning { code, message, measured_value, limit_value });
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Verifies `profile` against the aggregated `envelope` and the `paste`
/// tolerances.
///
/// Deterministic, no side effects beyond the returned result.
pub fn verify(
    profile: &ReflowProfile,
    envelope: &ThermalEnvelope,
    paste: &PasteSpecification,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    let peak = profile.peak_temp_c();
    let tal = time_above_liquidus(profile, paste.liquidus_temperature_c);
    let max_up_observed = profile
        .segments
        .iter()
        .map(|s| s.ramp_rate_c_per_s())
        .fold(0.0, f64::max);
    let max_down_observed = profile
        .segments
        .iter()
        .map(|s| -s.ramp_rate_c_per_s())
        .fold(0.0, f64::max);

    result.metrics.insert("peak_temp_c".to_string(), peak);
    result.metrics.insert("time_above_liquidus_s".to_string(), tal);
    result.metrics.insert("max_ramp_up_observed".to_string(), max_up_observed);
    result.metrics.insert("max_ramp_down_observed".to_string(), max_down_observed);
    result.metrics.insert("total_duration_s".to_string(), profile.total_duration_s());

    // === Peak ceiling ===

    if peak > envelope.max_temperature_c + TOLERANCE {
        result.add_violation(
            CheckCode::PeakCeiling,
            format!(
                "Peak {:.1}°C exceeds component ceiling {:.1}°C",
                peak, envelope.max_temperature_c
            ),
            peak,
            envelope.max_temperature_c,
        );
    }

    // === Ramp rates ===

    for segment in &profile.segments {
        let rate = segment.ramp_rate_c_per_s();
        if rate > 0.0 {
            let limit = envelope.max_ramp_up_c_per_s;
            if rate > limit + TOLERANCE {
                result.add_violation(
                    CheckCode::RampUpRate,
                    format!(
                        "{}: ramp-up {:.2}°C/s exceeds limit {:.2}°C/s",
                        segment.phase.as_str(),
                        rate,
                        limit
                    ),
                    rate,
                    limit,
                );
            } else if rate > limit * NEAR_LIMIT_FRACTION + TOLERANCE {
                result.add_warning(
                    CheckCode::RampUpRate,
                    format!(
                        "{}: ramp-up {:.2}°C/s is close to limit {:.2}°C/s",
                        segment.phase.as_str(),
                        rate,
                        limit
                    ),
                    rate,
                    limit,
                );
            }
        } else if rate < 0.0 {
            let fall = -rate;
            let limit = envelope.max_ramp_down_c_per_s;
            if fall > limit + TOLERANCE {
                result.add_violation(
                    CheckCode::RampDownRate,
                    format!(
                        "{}: cool-down {:.2}°C/s exceeds limit {:.2}°C/s",
                        segment.phase.as_str(),
                        fall,
                        limit
                    ),
                    fall,
                    limit,
                );
            } else if fall > limit * NEAR_LIMIT_FRACTION + TOLERANCE {
                result.add_warning(
                    CheckCode::RampDownRate,
                    format!(
                        "{}: cool-down {:.2}°C/s is close to limit {:.2}°C/s",
                        segment.phase.as_str(),
                        fall,
                        limit
                    ),
                    fall,
                    limit,
                );
            }
        }
    }

    // === Time above liquidus ===

    let tal_window = paste.time_above_liquidus_range_s;
    if tal < tal_window.low - TOLERANCE {
        result.add_violation(
            CheckCode::TimeAboveLiquidus,
            format!(
                "Time above liquidus {:.1}s is below paste minimum {:.1}s",
                tal, tal_window.low
            ),
            tal,
            tal_window.low,
        );
    } else if tal > tal_window.high + TOLERANCE {
        // Over-soldering risk is softer than under-soldering.
        result.add_warning(
            CheckCode::TimeAboveLiquidus,
            format!(
                "Time above liquidus {:.1}s exceeds paste maximum {:.1}s",
                tal, tal_window.high
            ),
            tal,
            tal_window.high,
        );
    }
    if let Some(min_tal) = envelope.min_time_above_liquidus_s {
        if tal < min_tal - TOLERANCE {
            result.add_violation(
                CheckCode::TimeAboveLiquidus,
                format!(
                    "Time above liquidus {:.1}s is below component minimum {:.1}s",
                    tal, min_tal
                ),
                tal,
                min_tal,
            );
        }
    }

    // === Soak duration ===

    if let Some(min_soak) = envelope.min_soak_time_s {
        let soak = profile.phase_duration_s(Phase::Soak);
        if soak < min_soak - TOLERANCE {
            result.add_violation(
                CheckCode::SoakDuration,
                format!(
                    "Soak duration {:.1}s is below component minimum {:.1}s",
                    soak, min_soak
                ),
                soak,
                min_soak,
            );
        }
    }

    // === Peak range ===

    let peak_window = paste.peak_temperature_range;
    if peak < peak_window.low - TOLERANCE {
        result.add_violation(
            CheckCode::PeakRange,
            format!(
                "Peak {:.1}°C is below paste minimum peak {:.1}°C",
                peak, peak_window.low
            ),
            peak,
            peak_window.low,
        );
    } else if peak > peak_window.high + TOLERANCE {
        // The hard excess case is already covered by the ceiling check.
        result.add_warning(
            CheckCode::PeakRange,
            format!(
                "Peak {:.1}°C is above paste maximum peak {:.1}°C",
                peak, peak_window.high
            ),
            peak,
            peak_window.high,
        );
    }

    info!(
        "verified {}: {} ({} violations, {} warnings)",
        profile.profile_id,
        if result.passed { "passed" } else { "failed" },
        result.violations.len(),
        result.warnings.len()
    );
    result
}
