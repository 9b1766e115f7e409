//! Error types for profile planning and interpolation.

/// Result type for core profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Error type for core profile operations
///
/// Verification never produces a `ProfileError` for a profile that merely
/// fails its constraints; that is the normal `ValidationResult` path with
/// itemized violations. These errors are structural and always propagated
/// to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// Aggregation was handed an empty envelope sequence. Caller bug;
    /// retrying without different inputs cannot succeed.
    #[error("no thermal envelopes provided")]
    EmptyInput,

    /// No segment schedule satisfies all constraints simultaneously. The
    /// message names the constraint that could not be met.
    #[error("infeasible profile: {0}")]
    Infeasible(String),

    /// Interpolation was queried outside the profile duration. Callers that
    /// want extrapolation must clamp deliberately.
    #[error("time {t:.1}s is outside the profile range [0, {total:.1}s]")]
    OutOfRange { t: f64, total: f64 },
}
