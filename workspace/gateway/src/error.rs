use thiserror::Error;

/// Error types for the prediction gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The predictor ran to completion but reported the input as invalid
    #[error("{0}")]
    Rejected(String),

    /// The predictor process exited with a nonzero status
    #[error("Prediction engine exited with {}: {stderr}", describe_code(*code))]
    Execution {
        /// Exit code, `None` when the process was terminated by a signal
        code: Option<i32>,
        /// Everything the process wrote to standard error
        stderr: String,
    },

    /// The predictor exited cleanly but its standard output was not JSON
    #[error("Invalid response from prediction engine")]
    InvalidResponse {
        /// Raw standard output, kept for server-side diagnostics
        raw: String,
    },

    /// The predictor process could not be launched
    #[error("Failed to start prediction engine: {0}")]
    Spawn(#[from] std::io::Error),

    /// The task descriptor could not be encoded
    #[error("Failed to encode predictor task: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Coarse classification used by callers to pick a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Semantic problem reported by the predictor itself
    DomainRejection,
    /// Process-level failure (nonzero exit, launch failure)
    ExecutionFailure,
    /// Output could not be understood
    IntegrationFailure,
}

impl GatewayError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::Rejected(_) => FailureKind::DomainRejection,
            GatewayError::Execution { .. } | GatewayError::Spawn(_) => {
                FailureKind::ExecutionFailure
            }
            GatewayError::InvalidResponse { .. } | GatewayError::Serialize(_) => {
                FailureKind::IntegrationFailure
            }
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
