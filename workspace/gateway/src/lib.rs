//! Prediction gateway.
//!
//! Bridges the external predictor's process protocol (one JSON argument in,
//! JSON on stdout, exit code plus stderr on failure) to structured results.
//! Every invocation launches exactly one process; nothing is pooled, cached
//! or retried.

pub mod error;
pub mod process;
pub mod task;

pub use error::{FailureKind, GatewayError, Result};
pub use process::ProcessPredictor;
pub use task::PredictorTask;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Anything able to answer predictor tasks.
///
/// The production implementation is [`ProcessPredictor`]; tests substitute
/// in-memory doubles.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Run a single task and return the predictor's parsed payload
    async fn run(&self, task: &PredictorTask) -> Result<Value>;

    /// Human readable description of the backing engine
    fn describe(&self) -> String;
}

/// Everything a finished predictor process produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutcome {
    pub fn new(code: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Classify a finished process into a payload or a [`GatewayError`].
///
/// Exit status is inspected first; stdout is only parsed for a clean exit.
/// A parsed payload carrying a non-empty `error` field is a domain rejection.
pub fn classify_outcome(outcome: ProcessOutcome) -> Result<Value> {
    if outcome.code != Some(0) {
        error!(
            "Predictor exited with {:?}, stderr: {}",
            outcome.code, outcome.stderr
        );
        return Err(GatewayError::Execution {
            code: outcome.code,
            stderr: outcome.stderr,
        });
    }

    let payload: Value = match serde_json::from_str(&outcome.stdout) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to parse predictor output ({}): {}", e, outcome.stdout);
            return Err(GatewayError::InvalidResponse { raw: outcome.stdout });
        }
    };

    if let Some(message) = rejection_message(&payload) {
        warn!("Predictor rejected the task: {}", message);
        return Err(GatewayError::Rejected(message));
    }

    debug!("Predictor payload accepted");
    Ok(payload)
}

fn rejection_message(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
