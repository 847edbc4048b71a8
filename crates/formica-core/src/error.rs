//! Error types for Formica operations.
//!
//! Every fallible operation in the core returns [`Result`]. Rendering
//! errors are not part of this taxonomy: they belong to the sink that
//! raised them and are carried back to the caller unchanged.

use thiserror::Error;

/// Result type for Formica operations.
pub type Result<T> = std::result::Result<T, FormicaError>;

/// Errors that can occur while planning or replaying a colony run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormicaError {
    /// A count, step size or coordinate was out of its valid domain.
    #[error("Invalid parameter {field}: {reason}")]
    InvalidParameter { field: String, reason: String },

    /// The pheromone memory was used out of order.
    #[error("Memory error: {0}")]
    MemoryState(#[from] MemoryStateError),

    /// A frame index past the end of the timeline was requested.
    #[error("Frame {frame} out of range (timeline has {total} frames)")]
    FrameOutOfRange { frame: usize, total: usize },
}

/// Misuse of the single-slot pheromone memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryStateError {
    /// A trail has already been laid; the slot is write-once.
    #[error("pheromone trail already written")]
    AlreadyWritten,
    /// A trail was required but none has been laid.
    #[error("no pheromone trail has been laid")]
    Unmarked,
}

// Convenience constructors
impl FormicaError {
    pub fn invalid_parameter(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FormicaError::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn already_written() -> Self {
        FormicaError::MemoryState(MemoryStateError::AlreadyWritten)
    }

    /// Whether this error came from a rejected argument.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, FormicaError::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = FormicaError::invalid_parameter("step_count", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter step_count: must be at least 1"
        );
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn memory_error_converts() {
        let err: FormicaError = MemoryStateError::AlreadyWritten.into();
        assert_eq!(err, FormicaError::already_written());
        assert_eq!(err.to_string(), "Memory error: pheromone trail already written");
    }
}
