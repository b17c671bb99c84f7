use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use gateway::PredictorTask;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;
use validator::Validate;

use crate::helpers::responses::{
    gateway_failure, json_rejection, validation_error, ApiError, MISSING_FIELDS_MESSAGE,
};
use crate::schemas::AppState;
#[allow(unused_imports)]
use common::{ErrorResponse, PredictionResult};

/// Request body for a forecast
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct PredictRequest {
    /// Locality name (required)
    #[validate(required, length(min = 1))]
    pub locality: Option<String>,
    /// "linear" or "polynomial" (required)
    #[validate(required, length(min = 1))]
    pub model_type: Option<String>,
    /// First forecast year; left to the prediction engine when absent
    pub base_year: Option<i32>,
}

/// Forecast prices for a locality
#[utoipa::path(
    post,
    path = "/api/predict",
    tag = "forecast",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Forecast produced by the prediction engine", body = PredictionResult),
        (status = 400, description = "Missing fields or rejected by the prediction engine", body = ErrorResponse),
        (status = 500, description = "Prediction engine failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = body.map_err(json_rejection)?;
    run_prediction(&state, request).await
}

/// Alias of `/api/predict` kept for older clients
#[utoipa::path(
    post,
    path = "/api/predict_trend",
    tag = "forecast",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Forecast produced by the prediction engine", body = PredictionResult),
        (status = 400, description = "Missing fields or rejected by the prediction engine", body = ErrorResponse),
        (status = 500, description = "Prediction engine failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn predict_trend(
    State(state): State<AppState>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = body.map_err(json_rejection)?;
    run_prediction(&state, request).await
}

async fn run_prediction(state: &AppState, request: PredictRequest) -> Result<Json<Value>, ApiError> {
    trace!("Entering run_prediction function");

    if let Err(errors) = request.validate() {
        warn!("Rejecting predict request: {}", errors);
        return Err(validation_error(MISSING_FIELDS_MESSAGE));
    }
    let (Some(locality), Some(model_type)) = (request.locality, request.model_type) else {
        return Err(validation_error(MISSING_FIELDS_MESSAGE));
    };

    debug!(
        "Forecasting locality '{}' with {} model from base year {:?}",
        locality, model_type, request.base_year
    );
    let task = PredictorTask::predict(locality, model_type, request.base_year);

    match state.predictor.run(&task).await {
        Ok(payload) => {
            info!("Forecast produced for task {:?}", task);
            Ok(Json(payload))
        }
        Err(err) => {
            error!("Prediction failed for task {:?}: {}", task, err);
            Err(gateway_failure(err, "Prediction failed"))
        }
    }
}
