//! Built-in per-component-type limits table.
//!
//! Legacy limit format: keyed by component type rather than MPN, with
//! separate ramp-up/ramp-down bounds and a minimum time above liquidus but
//! no soak requirement. Used when no MPN database is supplied.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::domain::{Component, ThermalEnvelope};
use crate::limits::repository::{ComponentLimit, LimitsRepository};

/// Legacy type-keyed limit record.
#[derive(Debug, Clone, Copy)]
struct TypeLimits {
    max_temp_c: f64,
    max_ramp_up_c_per_s: f64,
    max_ramp_down_c_per_s: f64,
    min_time_above_liquidus_s: f64,
}

impl From<&TypeLimits> for ThermalEnvelope {
    fn from(limits: &TypeLimits) -> Self {
        ThermalEnvelope {
            max_temperature_c: limits.max_temp_c,
            max_ramp_up_c_per_s: limits.max_ramp_up_c_per_s,
            max_ramp_down_c_per_s: limits.max_ramp_down_c_per_s,
            min_soak_time_s: None,
            min_time_above_liquidus_s: Some(limits.min_time_above_liquidus_s),
        }
    }
}

static TYPE_LIMITS: Lazy<HashMap<&'static str, TypeLimits>> = Lazy::new(|| {
    HashMap::from([
        (
            "IC",
            TypeLimits {
                max_temp_c: 260.0,
                max_ramp_up_c_per_s: 3.0,
                max_ramp_down_c_per_s: 4.0,
                min_time_above_liquidus_s: 60.0,
            },
        ),
        (
            "Capacitor",
            TypeLimits {
                max_temp_c: 245.0,
                max_ramp_up_c_per_s: 2.5,
                max_ramp_down_c_per_s: 3.5,
                min_time_above_liquidus_s: 60.0,
            },
        ),
        (
            "Resistor",
            TypeLimits {
                max_temp_c: 270.0,
                max_ramp_up_c_per_s: 4.0,
                max_ramp_down_c_per_s: 5.0,
                min_time_above_liquidus_s: 60.0,
            },
        ),
        (
            "Inductor",
            TypeLimits {
                max_temp_c: 250.0,
                max_ramp_up_c_per_s: 3.0,
                max_ramp_down_c_per_s: 4.0,
                min_time_above_liquidus_s: 60.0,
            },
        ),
        (
            "Connector",
            TypeLimits {
                max_temp_c: 240.0,
                max_ramp_up_c_per_s: 2.0,
                max_ramp_down_c_per_s: 3.0,
                min_time_above_liquidus_s: 60.0,
            },
        ),
    ])
});

/// Type-keyed limits database with conservative values for common parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLimits;

impl BuiltinLimits {
    pub fn new() -> Self {
        Self
    }
}

impl LimitsRepository for BuiltinLimits {
    fn lookup(&self, component: &Component) -> Option<ComponentLimit> {
        TYPE_LIMITS
            .get(component.component_type.as_str())
            .map(|limits| ComponentLimit {
                mpn: component.mpn.clone(),
                envelope: ThermalEnvelope::from(limits),
                notes: format!("type-based limits ({})", component.component_type),
            })
    }
}
