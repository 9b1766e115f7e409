//! End-to-end profile pipeline.
//!
//! Composes the stages as plain sequential function calls: parse the BOM,
//! resolve thermal limits, aggregate the strictest envelope, validate the
//! canonical inputs, plan, and verify. A failed verification is a normal
//! outcome; only structural problems (unreadable inputs, empty limit
//! matches, infeasible constraints) surface as errors.

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::warn;

use crate::algorithms::aggregation::aggregate;
use crate::algorithms::planning::{plan_with_policy, PlannerPolicy};
use crate::core::domain::{Component, PasteSpecification, ReflowProfile, ThermalEnvelope};
use crate::io::loaders::InputLoader;
use crate::limits::repository::{most_restrictive, ComponentLimit, LimitsRepository};
use crate::preprocessing::validator::SpecValidator;
use crate::services::verification::{verify, ValidationResult};

/// Configuration for the profile pipeline
pub struct PipelineConfig {
    pub validate_inputs: bool,
    pub policy: PlannerPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { validate_inputs: true, policy: PlannerPolicy::default() }
    }
}

/// Result of a full pipeline run
#[derive(Debug)]
pub struct PipelineOutcome {
    pub components: Vec<Component>,
    pub limits: Vec<ComponentLimit>,
    pub envelope: ThermalEnvelope,
    pub profile: ReflowProfile,
    pub validation: ValidationResult,
}

/// Main profile pipeline
pub struct ProfilePipeline {
    config: PipelineConfig,
}

impl ProfilePipeline {
    /// Creates a pipeline with the default configuration.
    pub fn new() -> Self {
        Self { config: PipelineConfig::default() }
    }

    /// Creates a pipeline with a custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Runs the pipeline from input files.
    pub fn process(
        &self,
        bom_path: &Path,
        paste_path: &Path,
        repository: &dyn LimitsRepository,
    ) -> Result<PipelineOutcome> {
        // Step 1: Load inputs
        let components = InputLoader::load_bom(bom_path)?;
        let paste = InputLoader::load_paste(paste_path)?;

        self.process_inputs(components, paste, repository)
    }

    /// Runs the pipeline from already-loaded inputs.
    pub fn process_inputs(
        &self,
        components: Vec<Component>,
        paste: PasteSpecification,
        repository: &dyn LimitsRepository,
    ) -> Result<PipelineOutcome> {
        // Step 2: Resolve component limits
        let limits = repository.limits_for_bom(&components);
        if limits.is_empty() {
            bail!("no thermal limits matched the BOM; cannot derive an envelope");
        }
        most_restrictive(&limits).context("Failed to identify the most restrictive component")?;

        // Step 3: Aggregate the strictest envelope
        let envelopes: Vec<ThermalEnvelope> =
            limits.iter().map(|limit| limit.envelope).collect();
        let envelope =
            aggregate(&envelopes).context("Failed to aggregate thermal envelopes")?;

        // Step 4: Validate the canonical inputs
        if self.config.validate_inputs {
            let report = SpecValidator::validate_inputs(&envelope, &paste);
            for warning in &report.warnings {
                warn!("{warning}");
            }
            if !report.is_valid {
                bail!("invalid planner inputs: {}", report.errors.join("; "));
            }
        }

        // Step 5: Plan
        let profile = plan_with_policy(&envelope, &paste, &self.config.policy)
            .context("Profile planning failed")?;

        // Step 6: Verify
        let validation = verify(&profile, &envelope, &paste);

        Ok(PipelineOutcome { components, limits, envelope, profile, validation })
    }
}

impl Default for ProfilePipeline {
    fn default() -> Self {
        Self::new()
    }
}
