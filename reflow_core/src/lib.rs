//! Reflow profile planning and verification engine.
//!
//! Converts a bill of materials plus a solder paste specification into a
//! validated time/temperature reflow oven profile: per-component thermal
//! limits are aggregated into the strictest envelope, a piecewise-linear
//! profile is synthesized from it, and the result is verified against every
//! constraint with itemized violations and warnings.
//!
//! All entry points are synchronous and pure; every object is either
//! freshly constructed or read-only after construction, so independent
//! callers can fan out over separate inputs without coordination.

pub mod algorithms;
pub mod config;
pub mod core;
pub mod io;
pub mod limits;
pub mod parsing;
pub mod preprocessing;
pub mod services;
