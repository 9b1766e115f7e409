//! Five-phase reflow profile synthesis.
//!
//! The planner turns the strictest thermal envelope plus a paste
//! specification into a contiguous piecewise-linear profile covering
//! preheat, soak, ramp-to-peak, reflow, and cooling. It either returns a
//! profile that satisfies every constraint it was given or fails naming the
//! constraint that could not be met; it never silently violates one.

use log::{debug, info};

use crate::core::domain::{
    PasteSpecification, Phase, ProfileSegment, ReflowProfile, ThermalEnvelope, AMBIENT_TEMP_C,
};
use crate::core::error::{ProfileError, ProfileResult};

/// Tunable planning policy.
///
/// Ramp rates are derated by a fraction of their cap; the peak target is
/// held an absolute number of degrees under the ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerPolicy {
    /// Fraction shaved off every capped ramp rate (0.05 = plan at 95 %).
    pub rate_margin: f64,
    /// Absolute headroom kept under the envelope temperature ceiling, °C.
    pub peak_margin_c: f64,
    /// Board temperature at profile start, °C.
    pub ambient_c: f64,
    /// Temperature at which the planned profile ends, °C.
    pub cooldown_exit_c: f64,
}

impl Default for PlannerPolicy {
    fn default() -> Self {
        Self {
            rate_margin: 0.05,
            peak_margin_c: 5.0,
            ambient_c: AMBIENT_TEMP_C,
            cooldown_exit_c: 100.0,
        }
    }
}

/// Plans a reflow profile with the default policy.
///
/// See [`plan_with_policy`] for the synthesis rules and failure modes.
pub fn plan(
    envelope: &ThermalEnvelope,
    paste: &PasteSpecification,
) -> ProfileResult<ReflowProfile> {
    plan_with_policy(envelope, paste, &PlannerPolicy::default())
}

/// Plans a reflow profile for `paste` under the aggregated `envelope`.
///
/// Phase policy:
///
/// 1. **Preheat**: ambient to the paste preheat target at the capped,
///    margin-derated ramp-up rate.
/// 2. **Soak**: preheat target to the soak window midpoint; duration is the
///    soak window midpoint, raised to the envelope's minimum soak time and
///    to whatever the capped ramp needs to reach the setpoint.
/// 3. **Ramp to peak**: soak setpoint to liquidus at the same capped rate.
/// 4. **Reflow**: liquidus up to the peak target and back, split as
///    ramp-up / dwell / ramp-down with the dwell absorbing the remaining
///    time-above-liquidus target. The peak target is the paste peak window
///    midpoint clamped under the envelope ceiling minus the margin.
/// 5. **Cooling**: liquidus down to the exit temperature at the paste
///    cooling midpoint, capped by the derated envelope ramp-down rate.
///
/// # Errors
///
/// [`ProfileError::Infeasible`] when the peak ceiling falls below the paste
/// minimum peak, when a required dwell exceeds its paste window, or when the
/// capped ramps cannot keep time-above-liquidus inside the paste window.
pub fn plan_with_policy(
    envelope: &ThermalEnvelope,
    paste: &PasteSpecification,
    policy: &PlannerPolicy,
) -> ProfileResult<ReflowProfile> {
    let derate = 1.0 - policy.rate_margin;
    let ramp_up = paste
        .max_ramp_rate_c_per_s
        .min(envelope.max_ramp_up_c_per_s)
        * derate;
    let ramp_down = envelope.max_ramp_down_c_per_s * derate;
    if ramp_up <= 0.0 || ramp_down <= 0.0 {
        return Err(ProfileError::Infeasible(
            "effective ramp rate is not positive".to_string(),
        ));
    }
    debug!("planning with ramp_up={ramp_up:.3}°C/s ramp_down={ramp_down:.3}°C/s");

    // Peak target: paste window midpoint, clamped under the derated ceiling.
    let ceiling = envelope.max_temperature_c - policy.peak_margin_c;
    let peak = paste.peak_temperature_range.midpoint().min(ceiling);
    if peak < paste.peak_temperature_range.low {
        return Err(ProfileError::Infeasible(format!(
            "peak temperature ceiling {:.1}°C is below paste minimum peak {:.1}°C",
            ceiling, paste.peak_temperature_range.low
        )));
    }

    // Soak: the longest of the window midpoint, the envelope floor, and the
    // time the capped ramp needs to reach the setpoint.
    let soak_temp = paste.soak_temperature_range.midpoint();
    let soak_ramp_need = (soak_temp - paste.preheat_target_c).abs() / ramp_up;
    let soak_duration = paste
        .soak_duration_range_s
        .midpoint()
        .max(envelope.min_soak_time_s.unwrap_or(0.0))
        .max(soak_ramp_need);
    if soak_duration > paste.soak_duration_range_s.high {
        return Err(ProfileError::Infeasible(format!(
            "required soak duration {:.0}s exceeds the paste soak window maximum {:.0}s",
            soak_duration, paste.soak_duration_range_s.high
        )));
    }

    // Time above liquidus: window midpoint raised to the envelope floor.
    let tal_window = paste.time_above_liquidus_range_s;
    let tal_target = tal_window
        .midpoint()
        .max(envelope.min_time_above_liquidus_s.unwrap_or(0.0));
    if tal_target > tal_window.high {
        return Err(ProfileError::Infeasible(format!(
            "required time above liquidus {:.0}s exceeds the paste maximum {:.0}s",
            tal_target, tal_window.high
        )));
    }

    let liquidus = paste.liquidus_temperature_c;
    let rise = peak - liquidus;
    let reflow_up_s = rise / ramp_up;
    let reflow_down_s = rise / ramp_down;
    if reflow_up_s + reflow_down_s > tal_window.high {
        return Err(ProfileError::Infeasible(format!(
            "reflow ramps alone hold {:.0}s above liquidus, beyond the paste maximum {:.0}s",
            reflow_up_s + reflow_down_s,
            tal_window.high
        )));
    }
    let dwell_s = (tal_target - reflow_up_s - reflow_down_s).max(0.0);

    let cooling_rate = paste
        .cooling_rate_range_c_per_s
        .midpoint()
        .min(ramp_down);
    let cooling_drop = liquidus - policy.cooldown_exit_c;

    let mut builder = SegmentBuilder::new(policy.ambient_c);
    builder.push(
        Phase::Preheat,
        (paste.preheat_target_c - policy.ambient_c) / ramp_up,
        paste.preheat_target_c,
    );
    builder.push(Phase::Soak, soak_duration, soak_temp);
    builder.push(Phase::RampToPeak, (liquidus - soak_temp) / ramp_up, liquidus);
    builder.push(Phase::Reflow, reflow_up_s, peak);
    builder.push(Phase::Reflow, dwell_s, peak);
    builder.push(Phase::Reflow, reflow_down_s, liquidus);
    if cooling_drop > 0.0 {
        builder.push(Phase::Cooling, cooling_drop / cooling_rate, policy.cooldown_exit_c);
    }

    let profile = ReflowProfile {
        profile_id: profile_id_for(&paste.name),
        segments: builder.segments,
    };
    info!(
        "planned profile {}: peak {:.1}°C, {:.0}s above liquidus, {:.0}s total",
        profile.profile_id,
        peak,
        reflow_up_s + dwell_s + reflow_down_s,
        profile.total_duration_s()
    );
    Ok(profile)
}

fn profile_id_for(paste_name: &str) -> String {
    let slug: String = paste_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("{}-reflow", slug.trim_matches('-'))
}

/// Accumulates contiguous segments; each push continues from the previous
/// segment's end time and end temperature. Zero-length legs collapse so the
/// `end_time_s > start_time_s` invariant holds for every emitted segment.
struct SegmentBuilder {
    segments: Vec<ProfileSegment>,
    time_s: f64,
    temp_c: f64,
}

impl SegmentBuilder {
    fn new(ambient_c: f64) -> Self {
        Self { segments: Vec::new(), time_s: 0.0, temp_c: ambient_c }
    }

    fn push(&mut self, phase: Phase, duration_s: f64, end_temp_c: f64) {
        if duration_s <= 0.0 {
            return;
        }
        let end_time_s = self.time_s + duration_s;
        self.segments.push(ProfileSegment {
            phase,
            start_time_s: self.time_s,
            end_time_s,
            start_temp_c: self.temp_c,
            end_temp_c,
        });
        self.time_s = end_time_s;
        self.temp_c = end_temp_c;
    }
}
