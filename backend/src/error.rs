//! Error types for visibility computations.

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

/// Error type for kernel operations.
///
/// Every variant is a local validation failure: the kernel performs no I/O,
/// so nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("Invalid observer location: {0}")]
    InvalidLocation(String),

    #[error("Empty ephemeris: at least one sample is required")]
    EmptyEphemeris,

    #[error("Malformed sample at index {index}: {reason}")]
    MalformedSample { index: usize, reason: String },

    #[error("Invalid declination: {0}")]
    InvalidDeclination(f64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl KernelError {
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        KernelError::MalformedSample {
            index,
            reason: reason.into(),
        }
    }

    /// Wording for the presentation layer, which must never show raw error identifiers.
    pub fn user_message(&self) -> &'static str {
        match self {
            KernelError::InvalidLocation(_) => "Set your location to see when this object is visible.",
            KernelError::EmptyEphemeris
            | KernelError::MalformedSample { .. }
            | KernelError::InvalidDeclination(_) => {
                "No ephemeris data available for this object right now."
            }
            KernelError::Configuration(_) => "Visibility forecasts are temporarily unavailable.",
        }
    }
}
