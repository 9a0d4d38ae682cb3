//! Error taxonomy for the inspection pipeline.

/// Inspection errors.
///
/// The first three variants mean "no verdict could be produced" and surface
/// to the caller as request failures. An ambiguous narrative is NOT an
/// error: the extractor folds it into a FAIL verdict.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// A reference locator could not be resolved to a handle. Fatal to the
    /// deployment, not retried.
    #[error("reference corpus unavailable: {key} ({locator}) - {reason}")]
    CorpusUnavailable {
        key: String,
        locator: String,
        reason: String,
    },

    /// Caller requested a severity profile outside the fixed set. Rejected
    /// before any inference call is made.
    #[error("unknown severity profile: {name}")]
    UnknownProfile { name: String },

    /// The gateway call failed or returned no usable text. Never converted
    /// into a FAIL verdict.
    #[error("inference failure ({backend}): {message}")]
    InferenceFailure { backend: String, message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Result persistence failed.
    #[error("sink error at {path}: {message}")]
    Sink { path: String, message: String },
}

impl InspectError {
    pub fn inference(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InferenceFailure {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } | Self::UnknownProfile { .. } => 2,
            Self::CorpusUnavailable { .. } => 3,
            Self::InferenceFailure { .. } => 4,
            Self::Sink { .. } => 5,
        }
    }

    /// Whether a retry by an outer layer could plausibly succeed. The core
    /// itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InferenceFailure { .. })
    }
}

/// Result type for inspection operations.
pub type InspectResult<T> = Result<T, InspectError>;
