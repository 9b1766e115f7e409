//! Piecewise-linear temperature interpolation over a reflow profile.

use crate::core::domain::ReflowProfile;
use crate::core::error::{ProfileError, ProfileResult};

/// Returns the temperature at elapsed time `t`, linearly interpolated
/// between the breakpoints of the segment containing `t`.
///
/// Each segment owns the half-open interval `[start_time_s, end_time_s)`;
/// the final segment is closed on both ends so the profile's total duration
/// is a valid query point. Pure function; the profile is read-only.
///
/// # Errors
///
/// Returns [`ProfileError::OutOfRange`] when `t` is negative or exceeds the
/// total duration. Callers that want extrapolation must clamp deliberately.
///
/// # Examples
///
/// ```
/// use reflow_core::algorithms::temperature_at;
/// use reflow_core::core::domain::{Phase, ProfileSegment, ReflowProfile};
///
/// let profile = ReflowProfile {
///     profile_id: "demo".to_string(),
///     segments: vec![ProfileSegment {
///         phase: Phase::Preheat,
///         start_time_s: 0.0,
///         end_time_s: 100.0,
///         start_temp_c: 25.0,
///         end_temp_c: 125.0,
///     }],
/// };
///
/// assert_eq!(temperature_at(&profile, 50.0).unwrap(), 75.0);
/// assert_eq!(temperature_at(&profile, 100.0).unwrap(), 125.0);
/// assert!(temperature_at(&profile, -1.0).is_err());
/// ```
pub fn temperature_at(profile: &ReflowProfile, t: f64) -> ProfileResult<f64> {
    let total = profile.total_duration_s();
    if t < 0.0 || t > total || profile.segments.is_empty() {
        return Err(ProfileError::OutOfRange { t, total });
    }

    for segment in &profile.segments {
        if t >= segment.start_time_s && t < segment.end_time_s {
            let progress = (t - segment.start_time_s) / segment.duration_s();
            return Ok(segment.start_temp_c
                + (segment.end_temp_c - segment.start_temp_c) * progress);
        }
    }

    // t equals the total duration: the last interval is closed on both ends.
    Ok(profile.segments[profile.segments.len() - 1].end_temp_c)
}

/// Returns the total time, in seconds, the interpolated curve spends at or
/// above `liquidus_c`.
///
/// Each segment is linear, so the boundary crossing inside a segment (if
/// any) is solved exactly rather than sampled.
pub fn time_above_liquidus(profile: &ReflowProfile, liquidus_c: f64) -> f64 {
    profile
        .segments
        .iter()
        .map(|segment| {
            let duration = segment.duration_s();
            let (start, end) = (segment.start_temp_c, segment.end_temp_c);
            match (start >= liquidus_c, end >= liquidus_c) {
                (true, true) => duration,
                (false, false) => 0.0,
                _ => {
                    let to_crossing = duration * (liquidus_c - start) / (end - start);
                    if end >= liquidus_c {
                        duration - to_crossing
                    } else {
                        to_crossing
                    }
                }
            }
        })
        .sum()
}
