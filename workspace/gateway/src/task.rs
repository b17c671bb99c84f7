use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Task descriptor handed to the predictor as its single JSON argument.
///
/// Encodes as `{"task": "get_localities"}` or
/// `{"task": "predict", "locality": ..., "model_type": ..., "base_year": ...}`,
/// with `base_year` left out entirely when not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum PredictorTask {
    /// List every locality known to the predictor
    GetLocalities,
    /// Forecast prices for one locality with one regression model
    Predict {
        locality: String,
        model_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_year: Option<i32>,
    },
}

impl PredictorTask {
    pub fn predict(
        locality: impl Into<String>,
        model_type: impl Into<String>,
        base_year: Option<i32>,
    ) -> Self {
        PredictorTask::Predict {
            locality: locality.into(),
            model_type: model_type.into(),
            base_year,
        }
    }

    /// Wire name of the task
    pub fn name(&self) -> &'static str {
        match self {
            PredictorTask::GetLocalities => "get_localities",
            PredictorTask::Predict { .. } => "predict",
        }
    }

    /// Encode the task as the predictor's command-line argument
    pub fn to_argument(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
