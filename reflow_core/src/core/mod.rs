//! Core domain models for reflow profile planning.
//!
//! This module defines the fundamental data structures used throughout the
//! engine, representing thermal envelopes, paste specifications, and the
//! piecewise-linear reflow profile itself.

pub mod domain;
pub mod error;
