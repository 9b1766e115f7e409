//! Repository interface for component thermal limits.

use log::info;

use crate::core::domain::{Component, ThermalEnvelope};
use crate::core::error::{ProfileError, ProfileResult};

/// A component's resolved thermal limits: the canonical envelope plus the
/// identity it was resolved for, kept so diagnostics can name the most
/// restrictive part.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentLimit {
    pub mpn: String,
    pub envelope: ThermalEnvelope,
    pub notes: String,
}

/// Injected lookup interface for thermal limits databases.
///
/// Implementations resolve a BOM component to its thermal limits, or `None`
/// when the database has no entry for it.
pub trait LimitsRepository {
    /// Resolves one component, if the database covers it.
    fn lookup(&self, component: &Component) -> Option<ComponentLimit>;

    /// Resolves a whole BOM, skipping unmatched components and logging the
    /// match coverage.
    fn limits_for_bom(&self, components: &[Component]) -> Vec<ComponentLimit> {
        let limits: Vec<ComponentLimit> = components
            .iter()
            .filter_map(|component| self.lookup(component))
            .collect();

        let coverage = if components.is_empty() {
            0.0
        } else {
            limits.len() as f64 / components.len() as f64 * 100.0
        };
        info!(
            "matched {}/{} components ({:.0}% coverage)",
            limits.len(),
            components.len(),
            coverage
        );
        limits
    }
}

/// Identifies the most thermally sensitive component: the one with the
/// lowest temperature ceiling. When several share the minimum, the first
/// wins.
///
/// # Errors
///
/// Returns [`ProfileError::EmptyInput`] when `limits` is empty.
pub fn most_restrictive(limits: &[ComponentLimit]) -> ProfileResult<&ComponentLimit> {
    let strictest = limits
        .iter()
        .min_by(|a, b| {
            a.envelope
                .max_temperature_c
                .total_cmp(&b.envelope.max_temperature_c)
        })
        .ok_or(ProfileError::EmptyInput)?;

    info!(
        "most restrictive component is {} (Tmax={:.0}°C)",
        strictest.mpn, strictest.envelope.max_temperature_c
    );
    Ok(strictest)
}
