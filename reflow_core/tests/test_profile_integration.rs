//! Integration tests for the profile planning and verification flow.
//!
//! These tests ensure that:
//! 1. Planning succeeds and verifies cleanly on realistic inputs
//! 2. Infeasible constraint sets fail with the conflicting constraint named
//! 3. The verifier reports violations with measured and limit values
//! 4. The interpolator honors the profile bounds exactly

use std::io::Write;

use proptest::prelude::*;
use tempfile::{Builder, NamedTempFile};

use reflow_core::algorithms::aggregation::aggregate;
use reflow_core::algorithms::interpolation::temperature_at;
use reflow_core::algorithms::planning::plan;
use reflow_core::core::domain::{
    Band, PasteSpecification, Phase, ProfileSegment, ReflowProfile, ThermalEnvelope,
};
use reflow_core::core::error::ProfileError;
use reflow_core::services::pipeline::ProfilePipeline;
use reflow_core::services::verification::{verify, CheckCode};

// ==================== Helper Functions ====================

fn envelope(max_temp: f64, ramp_up: f64, ramp_down: f64) -> ThermalEnvelope {
    ThermalEnvelope {
        max_temperature_c: max_temp,
        max_ramp_up_c_per_s: ramp_up,
        max_ramp_down_c_per_s: ramp_down,
        min_soak_time_s: None,
        min_time_above_liquidus_s: None,
    }
}

fn sac305() -> PasteSpecification {
    PasteSpecification {
        name: "SAC305".to_string(),
        liquidus_temperature_c: 217.0,
        peak_temperature_range: Band::new(235.0, 250.0),
        preheat_target_c: 150.0,
        soak_temperature_range: Band::new(160.0, 180.0),
        soak_duration_range_s: Band::new(60.0, 120.0),
        time_above_liquidus_range_s: Band::new(45.0, 90.0),
        max_ramp_rate_c_per_s: 3.0,
        cooling_rate_range_c_per_s: Band::new(2.0, 4.0),
    }
}

// ==================== Planning Scenarios ====================

#[test]
fn test_capacitor_envelope_scenario_plans_and_passes() {
    let env = envelope(245.0, 2.5, 3.5);

    let profile = plan(&env, &sac305()).expect("scenario should be feasible");
    let result = verify(&profile, &env, &sac305());

    assert!(result.passed, "violations: {:?}", result.violations);
    assert!(result.metrics["peak_temp_c"] <= 245.0);
    assert!(result.metrics["time_above_liquidus_s"] >= 45.0);
    assert!(result.metrics["time_above_liquidus_s"] <= 90.0);
}

#[test]
fn test_low_ceiling_fails_naming_the_peak_conflict() {
    let env = envelope(200.0, 2.5, 3.5);

    match plan(&env, &sac305()) {
        Err(ProfileError::Infeasible(msg)) => {
            assert!(
                msg.contains("peak temperature ceiling"),
                "message should name the conflict, got: {msg}"
            );
        }
        other => panic!("expected InfeasibleProfileError, got {other:?}"),
    }
}

#[test]
fn test_planned_profile_starts_at_ambient_and_is_contiguous() {
    let profile = plan(&envelope(250.0, 3.0, 4.0), &sac305()).unwrap();

    assert_eq!(profile.segments[0].start_time_s, 0.0);
    assert_eq!(profile.segments[0].start_temp_c, 25.0);
    for pair in profile.segments.windows(2) {
        assert_eq!(pair[0].end_time_s, pair[1].start_time_s);
        assert_eq!(pair[0].end_temp_c, pair[1].start_temp_c);
    }
}

// ==================== Verification Scenarios ====================

#[test]
fn test_hand_built_fast_ramp_reports_measured_and_limit() {
    let profile = ReflowProfile {
        profile_id: "hand-built".to_string(),
        segments: vec![
            ProfileSegment {
                phase: Phase::Preheat,
                start_time_s: 0.0,
                end_time_s: 60.0,
                start_temp_c: 25.0,
                end_temp_c: 180.0,
            },
            ProfileSegment {
                phase: Phase::RampToPeak,
                start_time_s: 60.0,
                end_time_s: 70.0,
                start_temp_c: 180.0,
                end_temp_c: 240.0,
            },
            ProfileSegment {
                phase: Phase::Cooling,
                start_time_s: 70.0,
                end_time_s: 120.0,
                start_temp_c: 240.0,
                end_temp_c: 100.0,
            },
        ],
    };
    let env = envelope(245.0, 3.0, 4.0);

    let result = verify(&profile, &env, &sac305());

    assert!(!result.passed);
    let ramp = result
        .violations
        .iter()
        .find(|v| v.code == CheckCode::RampUpRate)
        .expect("expected a ramp-up violation");
    assert_eq!(ramp.measured_value, 6.0);
    assert_eq!(ramp.limit_value, 3.0);
}

// ==================== Interpolation Scenarios ====================

#[test]
fn test_temperature_at_rejects_both_out_of_range_directions() {
    let profile = plan(&envelope(245.0, 2.5, 3.5), &sac305()).unwrap();
    let total = profile.total_duration_s();

    assert!(matches!(
        temperature_at(&profile, -1.0),
        Err(ProfileError::OutOfRange { .. })
    ));
    assert!(matches!(
        temperature_at(&profile, total + 1.0),
        Err(ProfileError::OutOfRange { .. })
    ));
    assert!(temperature_at(&profile, total).is_ok());
}

#[test]
fn test_temperature_at_breakpoints_is_exact() {
    let profile = plan(&envelope(245.0, 2.5, 3.5), &sac305()).unwrap();

    for segment in &profile.segments {
        assert_eq!(
            temperature_at(&profile, segment.start_time_s).unwrap(),
            segment.start_temp_c
        );
    }
    let last = profile.segments.last().unwrap();
    assert_eq!(
        temperature_at(&profile, last.end_time_s).unwrap(),
        last.end_temp_c
    );
}

// ==================== Pipeline ====================

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_pipeline_from_files_with_mpn_database() {
    let bom = temp_file(
        ".csv",
        "Designator,MPN,Type,Quantity\n\
         U1,STM32F407VGT6,IC,1\n\
         C1,GRM188R71C104KA01,Capacitor,12\n\
         R1,UNKNOWN-PART,Resistor,8\n",
    );
    let paste = temp_file(
        ".json",
        r#"{
            "name": "SAC305",
            "liquidus_temperature_c": 217.0,
            "peak_temperature_range": [235.0, 250.0],
            "preheat_target_c": 150.0,
            "soak_temperature_range": [160.0, 180.0],
            "soak_duration_range_s": [60.0, 120.0],
            "time_above_liquidus_range_s": [45.0, 90.0],
            "max_ramp_rate_c_per_s": 3.0,
            "cooling_rate_range_c_per_s": [2.0, 4.0]
        }"#,
    );
    let limits = temp_file(
        ".json",
        r#"{
            "STM32F407VGT6": {
                "max_temp_c": 250.0,
                "max_ramp_rate_c_per_s": 3.0,
                "min_soak_time_s": 60.0,
                "min_time_above_liquidus_s": 40.0
            },
            "GRM188R71C104KA01": {
                "max_temp_c": 245.0,
                "max_ramp_rate_c_per_s": 2.5,
                "min_soak_time_s": 45.0,
                "min_time_above_liquidus_s": 30.0
            }
        }"#,
    );

    let db = reflow_core::io::loaders::InputLoader::load_limits_db(limits.path()).unwrap();
    let outcome = ProfilePipeline::new()
        .process(bom.path(), paste.path(), &db)
        .unwrap();

    // Two of three BOM lines match; the capacitor binds the envelope.
    assert_eq!(outcome.limits.len(), 2);
    assert_eq!(outcome.envelope.max_temperature_c, 245.0);
    assert_eq!(outcome.envelope.min_soak_time_s, Some(60.0));
    assert!(outcome.validation.passed, "violations: {:?}", outcome.validation.violations);
}

// ==================== Properties ====================

proptest! {
    /// Aggregation never loosens any bound.
    #[test]
    fn prop_aggregate_output_bounded_by_every_input(
        specs in proptest::collection::vec((230.0..280.0f64, 1.5..4.0f64, 2.0..5.0f64), 1..10)
    ) {
        let envelopes: Vec<ThermalEnvelope> = specs
            .iter()
            .map(|&(t, up, down)| envelope(t, up, down))
            .collect();

        let out = aggregate(&envelopes).unwrap();
        for env in &envelopes {
            prop_assert!(out.max_temperature_c <= env.max_temperature_c);
            prop_assert!(out.max_ramp_up_c_per_s <= env.max_ramp_up_c_per_s);
            prop_assert!(out.max_ramp_down_c_per_s <= env.max_ramp_down_c_per_s);
        }
    }

    /// Planner and verifier agree: any profile the planner produces from a
    /// feasible envelope passes verification against the same inputs.
    #[test]
    fn prop_plan_verify_round_trip(
        max_temp in 241.0..270.0f64,
        ramp_up in 1.5..4.0f64,
        ramp_down in 2.0..5.0f64,
        min_soak in proptest::option::of(0.0..120.0f64),
        min_tal in proptest::option::of(0.0..90.0f64),
    ) {
        let env = ThermalEnvelope {
            max_temperature_c: max_temp,
            max_ramp_up_c_per_s: ramp_up,
            max_ramp_down_c_per_s: ramp_down,
            min_soak_time_s: min_soak,
            min_time_above_liquidus_s: min_tal,
        };
        let paste = sac305();

        let profile = plan(&env, &paste).unwrap();
        let result = verify(&profile, &env, &paste);
        prop_assert!(result.passed, "violations: {:?}", result.violations);
    }

    /// Interpolation at any planned breakpoint returns the recorded
    /// temperature with no interpolation error.
    #[test]
    fn prop_breakpoints_interpolate_exactly(
        max_temp in 241.0..270.0f64,
        ramp_up in 1.5..4.0f64,
    ) {
        let env = envelope(max_temp, ramp_up, 4.0);
        let profile = plan(&env, &sac305()).unwrap();

        for segment in &profile.segments {
            prop_assert_eq!(
                temperature_at(&profile, segment.start_time_s).unwrap(),
                segment.start_temp_c
            );
        }
    }
}
