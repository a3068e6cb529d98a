use std::path::PathBuf;

/// Failure taxonomy shared by every layer of the lookup pipeline.
///
/// None of these are fatal to the running process. Store faults degrade to
/// an empty result, normalization faults abort the remainder of one batch,
/// validation faults ask for new input, and export faults end only the
/// export attempt.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Query error: {0}")]
    StoreFault(String),

    #[error("Malformed delay value: {value}")]
    MalformedDelay { value: String },

    #[error("Missing required column: {column}")]
    MissingField { column: &'static str },

    #[error("Invalid {field}: {reason}")]
    ValidationRejected { field: &'static str, reason: String },

    #[error("Could not export to {path}: {reason}")]
    ExportFailure { path: PathBuf, reason: String },
}

impl CoreError {
    pub(crate) fn rejected(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValidationRejected {
            field,
            reason: reason.into(),
        }
    }
}
