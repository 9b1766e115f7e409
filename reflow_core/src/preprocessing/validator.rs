//! Input validation for canonical envelopes and paste specifications.
//!
//! The planner assumes its inputs honor the data-model invariants (positive
//! rates, ordered bands, preheat and soak below liquidus). This module
//! checks those invariants up front and reports everything it finds, so a
//! bad ingestion adapter fails loudly before planning instead of producing
//! a nonsense profile.

use crate::core::domain::{Band, PasteSpecification, ThermalEnvelope, AMBIENT_TEMP_C};

/// Validation outcome for a set of planner inputs.
///
/// Errors make `is_valid` false; warnings are informational.
#[derive(Debug, Clone, PartialEq)]
pub struct InputReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl InputReport {
    pub fn new() -> Self {
        Self { is_valid: true, errors: Vec::new(), warnings: Vec::new() }
    }

    /// Adds a critical error and marks the report as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the report.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    fn merge(&mut self, other: InputReport) {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for InputReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for planner inputs.
pub struct SpecValidator;

impl SpecValidator {
    /// Validates a thermal envelope against the data-model invariants.
    pub fn validate_envelope(envelope: &ThermalEnvelope) -> InputReport {
        let mut report = InputReport::new();

        if envelope.max_ramp_up_c_per_s <= 0.0 {
            report.add_error(format!(
                "Envelope max ramp-up must be positive, got {}",
                envelope.max_ramp_up_c_per_s
            ));
        }
        if envelope.max_ramp_down_c_per_s <= 0.0 {
            report.add_error(format!(
                "Envelope max ramp-down must be positive, got {}",
                envelope.max_ramp_down_c_per_s
            ));
        }
        if envelope.max_temperature_c <= AMBIENT_TEMP_C {
            report.add_error(format!(
                "Envelope ceiling {}°C is not above ambient ({}°C)",
                envelope.max_temperature_c, AMBIENT_TEMP_C
            ));
        }
        if let Some(min_soak) = envelope.min_soak_time_s {
            if min_soak < 0.0 {
                report.add_error(format!("Negative minimum soak time: {min_soak}"));
            }
        }
        if let Some(min_tal) = envelope.min_time_above_liquidus_s {
            if min_tal < 0.0 {
                report.add_error(format!("Negative minimum time above liquidus: {min_tal}"));
            }
        }

        report
    }

    /// Validates a paste specification against the data-model invariants.
    pub fn validate_paste(paste: &PasteSpecification) -> InputReport {
        let mut report = InputReport::new();

        for (name, band) in [
            ("peak_temperature_range", &paste.peak_temperature_range),
            ("soak_temperature_range", &paste.soak_temperature_range),
            ("soak_duration_range_s", &paste.soak_duration_range_s),
            ("time_above_liquidus_range_s", &paste.time_above_liquidus_range_s),
            ("cooling_rate_range_c_per_s", &paste.cooling_rate_range_c_per_s),
        ] {
            Self::check_band(name, band, &mut report);
        }

        let liquidus = paste.liquidus_temperature_c;
        if liquidus <= AMBIENT_TEMP_C {
            report.add_error(format!(
                "Liquidus {liquidus}°C is not above ambient ({AMBIENT_TEMP_C}°C)"
            ));
        }
        if paste.peak_temperature_range.low <= liquidus {
            report.add_error(format!(
                "Peak window must sit above liquidus: {} <= {}",
                paste.peak_temperature_range.low, liquidus
            ));
        }
        if paste.preheat_target_c >= liquidus {
            report.add_error(format!(
                "Preheat target {}°C must stay below liquidus {}°C",
                paste.preheat_target_c, liquidus
            ));
        }
        if paste.preheat_target_c <= AMBIENT_TEMP_C {
            report.add_error(format!(
                "Preheat target {}°C is not above ambient ({AMBIENT_TEMP_C}°C)",
                paste.preheat_target_c
            ));
        }
        if paste.soak_temperature_range.high >= liquidus {
            report.add_error(format!(
                "Soak window must stay below liquidus: {} >= {}",
                paste.soak_temperature_range.high, liquidus
            ));
        }
        if paste.soak_temperature_range.low < paste.preheat_target_c {
            report.add_warning(format!(
                "Soak window starts below the preheat target: {} < {}",
                paste.soak_temperature_range.low, paste.preheat_target_c
            ));
        }
        if paste.max_ramp_rate_c_per_s <= 0.0 {
            report.add_error(format!(
                "Paste max ramp rate must be positive, got {}",
                paste.max_ramp_rate_c_per_s
            ));
        }
        if paste.cooling_rate_range_c_per_s.low <= 0.0 {
            report.add_error(format!(
                "Cooling rate window must be positive, got low bound {}",
                paste.cooling_rate_range_c_per_s.low
            ));
        }

        report
    }

    /// Validates an envelope/paste pair as one planning input set.
    pub fn validate_inputs(
        envelope: &ThermalEnvelope,
        paste: &PasteSpecification,
    ) -> InputReport {
        let mut report = Self::validate_envelope(envelope);
        report.merge(Self::validate_paste(paste));
        report
    }

    fn check_band(name: &str, band: &Band, report: &mut InputReport) {
        if band.low > band.high {
            report.add_error(format!(
                "{name} is inverted: low {} > high {}",
                band.low, band.high
            ));
        }
    }
}
