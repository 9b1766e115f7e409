//! Domain models for reflow profiles and thermal constraints.
//!
//! This module provides the core data structures that represent solder
//! reflow profiles, including temperature/time bands, per-component thermal
//! envelopes, paste specifications, and the segmented profile curve.

use serde::{Deserialize, Serialize};

/// Ambient starting temperature for every profile, in °C.
pub const AMBIENT_TEMP_C: f64 = 25.0;

/// A closed numeric band with a low and a high bound.
///
/// Bands describe paste tolerances such as the peak temperature window or
/// the acceptable time-above-liquidus range. They serialize as two-element
/// arrays (`[low, high]`), matching the paste datasheet JSON layout.
///
/// # Examples
///
/// ```
/// use reflow_core::core::domain::Band;
///
/// let peak = Band::new(235.0, 250.0);
/// assert_eq!(peak.midpoint(), 242.5);
/// assert!(peak.contains(240.0));
/// assert!(!peak.contains(251.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    /// Creates a new band.
    ///
    /// # Examples
    ///
    /// ```
    /// use reflow_core::core::domain::Band;
    ///
    /// let soak = Band::new(60.0, 120.0);
    /// assert_eq!(soak.low, 60.0);
    /// assert_eq!(soak.high, 120.0);
    /// ```
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns the midpoint of the band.
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Returns `true` when `value` lies within the band, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Returns the width of the band.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

impl From<[f64; 2]> for Band {
    fn from(pair: [f64; 2]) -> Self {
        Self { low: pair[0], high: pair[1] }
    }
}

impl From<Band> for [f64; 2] {
    fn from(band: Band) -> Self {
        [band.low, band.high]
    }
}

/// Thermal constraint envelope for one component, or the aggregated
/// strictest envelope for a whole board.
///
/// Rates are magnitudes in °C/s and must be positive; the temperature
/// ceiling must sit above ambient (25 °C). The two optional dwell minimums
/// are present only when the component datasheet specifies them. Envelopes
/// are immutable once produced by aggregation and are treated as read-only
/// by the planner and verifier.
///
/// # Examples
///
/// ```
/// use reflow_core::core::domain::ThermalEnvelope;
///
/// let envelope = ThermalEnvelope {
///     max_temperature_c: 245.0,
///     max_ramp_up_c_per_s: 2.5,
///     max_ramp_down_c_per_s: 3.5,
///     min_soak_time_s: None,
///     min_time_above_liquidus_s: Some(60.0),
/// };
/// assert!(envelope.max_temperature_c > 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalEnvelope {
    pub max_temperature_c: f64,
    pub max_ramp_up_c_per_s: f64,
    pub max_ramp_down_c_per_s: f64,
    #[serde(default)]
    pub min_soak_time_s: Option<f64>,
    #[serde(default)]
    pub min_time_above_liquidus_s: Option<f64>,
}

/// Solder paste specification as published by the paste vendor.
///
/// All temperatures in °C, durations in seconds, rates in °C/s. Every band
/// satisfies `low <= high`; the peak window lies entirely above the liquidus
/// temperature, while the preheat target and soak window lie below it
/// (preheat precedes soak, both happen before any solder melts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasteSpecification {
    pub name: String,
    pub liquidus_temperature_c: f64,
    pub peak_temperature_range: Band,
    pub preheat_target_c: f64,
    pub soak_temperature_range: Band,
    pub soak_duration_range_s: Band,
    pub time_above_liquidus_range_s: Band,
    pub max_ramp_rate_c_per_s: f64,
    pub cooling_rate_range_c_per_s: Band,
}

/// Reflow phase a profile segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Preheat,
    Soak,
    RampToPeak,
    Reflow,
    Cooling,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Preheat => "preheat",
            Phase::Soak => "soak",
            Phase::RampToPeak => "ramp_to_peak",
            Phase::Reflow => "reflow",
            Phase::Cooling => "cooling",
        }
    }
}

/// One linear piece of a reflow profile.
///
/// Segments are contiguous: each segment's end time and end temperature
/// equal the next segment's start time and start temperature, and a valid
/// segment always has `end_time_s > start_time_s`.
///
/// # Examples
///
/// ```
/// use reflow_core::core::domain::{Phase, ProfileSegment};
///
/// let segment = ProfileSegment {
///     phase: Phase::Preheat,
///     start_time_s: 0.0,
///     end_time_s: 50.0,
///     start_temp_c: 25.0,
///     end_temp_c: 150.0,
/// };
/// assert_eq!(segment.duration_s(), 50.0);
/// assert_eq!(segment.ramp_rate_c_per_s(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSegment {
    pub phase: Phase,
    pub start_time_s: f64,
    pub end_time_s: f64,
    pub start_temp_c: f64,
    pub end_temp_c: f64,
}

impl ProfileSegment {
    /// Returns the segment duration in seconds.
    pub fn duration_s(&self) -> f64 {
        self.end_time_s - self.start_time_s
    }

    /// Returns the signed ramp rate in °C/s (negative while cooling).
    pub fn ramp_rate_c_per_s(&self) -> f64 {
        let duration = self.duration_s();
        if duration <= 0.0 {
            return 0.0;
        }
        (self.end_temp_c - self.start_temp_c) / duration
    }

    /// Returns the hotter of the segment's two endpoint temperatures.
    pub fn max_temp_c(&self) -> f64 {
        self.start_temp_c.max(self.end_temp_c)
    }
}

/// Complete reflow profile: an ordered, gap-free sequence of segments.
///
/// Created once by the planner and read-only thereafter. The first segment
/// starts at `(0 s, 25 °C)`; segments ascend in time with no gaps. A phase
/// may span more than one segment (the reflow phase is ramp-up, dwell,
/// ramp-down).
///
/// # Examples
///
/// ```
/// use reflow_core::core::domain::{Phase, ProfileSegment, ReflowProfile};
///
/// let profile = ReflowProfile {
///     profile_id: "sac305-v1".to_string(),
///     segments: vec![
///         ProfileSegment {
///             phase: Phase::Preheat,
///             start_time_s: 0.0,
///             end_time_s: 60.0,
///             start_temp_c: 25.0,
///             end_temp_c: 150.0,
///         },
///         ProfileSegment {
///             phase: Phase::Soak,
///             start_time_s: 60.0,
///             end_time_s: 150.0,
///             start_temp_c: 150.0,
///             end_temp_c: 170.0,
///         },
///     ],
/// };
///
/// assert_eq!(profile.total_duration_s(), 150.0);
/// assert_eq!(profile.peak_temp_c(), 170.0);
/// assert_eq!(profile.phase_duration_s(Phase::Soak), 90.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflowProfile {
    pub profile_id: String,
    pub segments: Vec<ProfileSegment>,
}

impl ReflowProfile {
    /// Returns the total profile duration in seconds.
    pub fn total_duration_s(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end_time_s)
    }

    /// Returns the highest temperature reached anywhere in the profile.
    ///
    /// Segments are linear, so the maximum always sits on a breakpoint.
    pub fn peak_temp_c(&self) -> f64 {
        self.segments
            .iter()
            .fold(AMBIENT_TEMP_C, |acc, s| acc.max(s.max_temp_c()))
    }

    /// Returns the summed duration of every segment tagged with `phase`.
    pub fn phase_duration_s(&self, phase: Phase) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.phase == phase)
            .map(|s| s.duration_s())
            .sum()
    }

    /// Returns the profile as `(time_s, temp_c)` breakpoints for charting:
    /// every segment start plus the final segment end.
    pub fn breakpoints(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = self
            .segments
            .iter()
            .map(|s| (s.start_time_s, s.start_temp_c))
            .collect();
        if let Some(last) = self.segments.last() {
            points.push((last.end_time_s, last.end_temp_c));
        }
        points
    }
}

/// A single BOM line item with its thermal identity resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub designator: String,
    pub mpn: String,
    pub component_type: String,
    pub quantity: u32,
}
