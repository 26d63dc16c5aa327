//! Error types for the goes-toolkit workspace.

use thiserror::Error;

/// Result type alias using GoesError.
pub type GoesResult<T> = Result<T, GoesError>;

/// Primary error type for GOES imagery operations.
#[derive(Debug, Error)]
pub enum GoesError {
    // === Navigation Errors ===
    #[error("Invalid projection parameter '{param}': {message}")]
    Configuration { param: String, message: String },

    #[error("Invalid scan-angle axis: {0}")]
    InvalidAxis(String),

    // === Catalog Errors ===
    #[error("Storage error: {0}")]
    Storage(String),

    // === Colormap Errors ===
    #[error("Color table parse error at line {line}: {message}")]
    ColorTableParse { line: usize, message: String },

    #[error("Invalid colormap: {0}")]
    InvalidColormap(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GoesError {
    /// Build a configuration error for a named parameter.
    pub fn configuration(param: impl Into<String>, message: impl Into<String>) -> Self {
        GoesError::Configuration {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Whether this error was detected before any computation started.
    ///
    /// Precondition violations (bad parameters, bad axes, bad color lists)
    /// are rejected up front; everything else surfaced mid-operation.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            GoesError::Configuration { .. }
                | GoesError::InvalidAxis(_)
                | GoesError::InvalidColormap(_)
        )
    }
}

// Conversion from common error types
impl From<std::io::Error> for GoesError {
    fn from(err: std::io::Error) -> Self {
        GoesError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GoesError {
    fn from(err: serde_json::Error) -> Self {
        GoesError::Internal(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_classification() {
        assert!(GoesError::configuration("semi_major_axis", "must be positive").is_precondition());
        assert!(GoesError::InvalidAxis("empty x axis".to_string()).is_precondition());
        assert!(!GoesError::Storage("list failed".to_string()).is_precondition());
    }

    #[test]
    fn test_display_includes_parameter_name() {
        let err = GoesError::configuration("satellite_height", "must be positive, got -1");
        let msg = err.to_string();
        assert!(msg.contains("satellite_height"));
        assert!(msg.contains("must be positive"));
    }
}
