//! Thermal limits lookup.
//!
//! The planner and verifier never depend on any particular limits database
//! representation; they consume canonical [`ThermalEnvelope`]s produced
//! through the [`LimitsRepository`] interface. Two implementations ship with
//! the crate: a built-in per-component-type table and an MPN-keyed JSON
//! database.
//!
//! [`ThermalEnvelope`]: crate::core::domain::ThermalEnvelope

pub mod builtin;
pub mod json_db;
pub mod repository;

pub use builtin::BuiltinLimits;
pub use json_db::JsonLimitsDb;
pub use repository::{most_restrictive, ComponentLimit, LimitsRepository};
