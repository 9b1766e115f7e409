//! Strictest-wins aggregation of thermal envelopes.

use crate::core::domain::ThermalEnvelope;
use crate::core::error::{ProfileError, ProfileResult};

/// Reduces a non-empty set of per-component envelopes to the single
/// strictest envelope the whole board must obey.
///
/// The most restrictive ceiling and rate bounds win (minimum over inputs);
/// the longest required dwell wins (maximum over inputs, absent values
/// ignored). Deterministic, no side effects.
///
/// # Errors
///
/// Returns [`ProfileError::EmptyInput`] when `envelopes` is empty.
///
/// # Examples
///
/// ```
/// use reflow_core::algorithms::aggregate;
/// use reflow_core::core::domain::ThermalEnvelope;
///
/// let ic = ThermalEnvelope {
///     max_temperature_c: 260.0,
///     max_ramp_up_c_per_s: 3.0,
///     max_ramp_down_c_per_s: 4.0,
///     min_soak_time_s: Some(60.0),
///     min_time_above_liquidus_s: Some(60.0),
/// };
/// let capacitor = ThermalEnvelope {
///     max_temperature_c: 245.0,
///     max_ramp_up_c_per_s: 2.5,
///     max_ramp_down_c_per_s: 3.5,
///     min_soak_time_s: None,
///     min_time_above_liquidus_s: Some(75.0),
/// };
///
/// let strictest = aggregate(&[ic, capacitor]).unwrap();
/// assert_eq!(strictest.max_temperature_c, 245.0);
/// assert_eq!(strictest.max_ramp_up_c_per_s, 2.5);
/// assert_eq!(strictest.min_soak_time_s, Some(60.0));
/// assert_eq!(strictest.min_time_above_liquidus_s, Some(75.0));
/// ```
pub fn aggregate(envelopes: &[ThermalEnvelope]) -> ProfileResult<ThermalEnvelope> {
    let (first, rest) = envelopes.split_first().ok_or(ProfileError::EmptyInput)?;

    Ok(rest.iter().fold(*first, |acc, env| ThermalEnvelope {
        max_temperature_c: acc.max_temperature_c.min(env.max_temperature_c),
        max_ramp_up_c_per_s: acc.max_ramp_up_c_per_s.min(env.max_ramp_up_c_per_s),
        max_ramp_down_c_per_s: acc.max_ramp_down_c_per_s.min(env.max_ramp_down_c_per_s),
        min_soak_time_s: longest_required(acc.min_soak_time_s, env.min_soak_time_s),
        min_time_above_liquidus_s: longest_required(
            acc.min_time_above_liquidus_s,
            env.min_time_above_liquidus_s,
        ),
    }))
}

/// The longest required dwell binds; absent values are ignored.
fn longest_required(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
