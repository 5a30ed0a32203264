use std::fmt;

/// Result type for deepq operations
pub type Result<T> = std::result::Result<T, DqnError>;

/// Main error type for the training core
#[derive(Debug, Clone, PartialEq)]
pub enum DqnError {
    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Invalid dimensions for a state, prediction or batch
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Action index outside the environment's action space
    InvalidAction {
        action: usize,
        max_actions: usize,
    },

    /// Failure reported by an environment implementation
    Environment(String),

    /// Failure reported by a model implementation
    Model(String),

    /// IO errors (file operations)
    Io(String),

    /// Serialization/deserialization errors
    Serialization(String),
}

impl fmt::Display for DqnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DqnError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            DqnError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            DqnError::InvalidAction { action, max_actions } => {
                write!(f, "Invalid action {}: must be less than {}", action, max_actions)
            }
            DqnError::Environment(msg) => write!(f, "Environment error: {}", msg),
            DqnError::Model(msg) => write!(f, "Model error: {}", msg),
            DqnError::Io(msg) => write!(f, "IO error: {}", msg),
            DqnError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DqnError {}

impl From<std::io::Error> for DqnError {
    fn from(err: std::io::Error) -> Self {
        DqnError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DqnError {
    fn from(err: serde_json::Error) -> Self {
        DqnError::Serialization(err.to_string())
    }
}

// Helper functions for common error patterns
impl DqnError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        DqnError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        DqnError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
