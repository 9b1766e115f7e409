//! Service layer for verification, reporting, and orchestration.
//!
//! Services sit above the core algorithms: the verifier checks finished
//! profiles, the report renderer turns results into a human-readable
//! artifact, and the pipeline composes the whole flow from BOM to verified
//! profile.

pub mod pipeline;
pub mod report;
pub mod verification;

pub use pipeline::{PipelineConfig, PipelineOutcome, ProfilePipeline};
pub use report::render_markdown;
pub use verification::{verify, CheckCode, ValidationResult, Violation, Warning};
