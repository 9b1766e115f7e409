//! Markdown report rendering.
//!
//! A pure consumer of a finished profile plus its validation result; the
//! core never depends on anything in this module.

use chrono::Utc;

use crate::core::domain::ReflowProfile;
use crate::services::verification::ValidationResult;

/// Renders a profile and its validation result as a markdown report.
pub fn render_markdown(profile: &ReflowProfile, validation: &ValidationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Reflow profile report: {}\n\n", profile.profile_id));
    out.push_str(&format!(
        "Generated {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!(
        "**Status: {}** ({} violations, {} warnings)\n\n",
        if validation.passed { "PASSED" } else { "FAILED" },
        validation.violations.len(),
        validation.warnings.len()
    ));

    out.push_str("## Segments\n\n");
    out.push_str("| Phase | Start (s) | End (s) | Start (°C) | End (°C) | Rate (°C/s) |\n");
    out.push_str("|---|---|---|---|---|---|\n");
    for segment in &profile.segments {
        out.push_str(&format!(
            "| {} | {:.1} | {:.1} | {:.1} | {:.1} | {:+.2} |\n",
            segment.phase.as_str(),
            segment.start_time_s,
            segment.end_time_s,
            segment.start_temp_c,
            segment.end_temp_c,
            segment.ramp_rate_c_per_s()
        ));
    }
    out.push('\n');

    out.push_str("## Metrics\n\n");
    for (name, value) in &validation.metrics {
        out.push_str(&format!("- {name}: {value:.2}\n"));
    }
    out.push('\n');

    if !validation.violations.is_empty() {
        out.push_str("## Violations\n\n");
        for violation in &validation.violations {
            out.push_str(&format!(
                "- [{}] {} (measured {:.2}, limit {:.2})\n",
                violation.code.as_str(),
                violation.message,
                violation.measured_value,
                violation.limit_value
            ));
        }
        out.push('\n');
    }

    if !validation.warnings.is_empty() {
        out.push_str("## Warnings\n\n");
        for warning in &validation.warnings {
            out.push_str(&format!(
                "- [{}] {} (measured {:.2}, limit {:.2})\n",
                warning.code.as_str(),
                warning.message,
                warning.measured_value,
                warning.limit_value
            ));
        }
        out.push('\n');
    }

    out
}
