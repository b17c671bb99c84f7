use axum::{extract::State, response::Json};
use gateway::PredictorTask;
use serde_json::Value;
use tracing::{debug, error, info, instrument, trace};

use crate::helpers::responses::{gateway_failure, ApiError};
use crate::schemas::AppState;
#[allow(unused_imports)]
use common::{ErrorResponse, LocalitiesResponse};

/// List every locality the predictor knows about
#[utoipa::path(
    get,
    path = "/api/localities",
    tag = "localities",
    responses(
        (status = 200, description = "Localities retrieved successfully", body = LocalitiesResponse),
        (status = 400, description = "Prediction engine rejected the request", body = ErrorResponse),
        (status = 500, description = "Prediction engine failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_localities(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    trace!("Entering get_localities function");

    match state.predictor.run(&PredictorTask::GetLocalities).await {
        Ok(payload) => {
            let count = payload
                .get("localities")
                .and_then(Value::as_array)
                .map(Vec::len)
                .unwrap_or_default();
            info!("Retrieved {} localities", count);
            debug!("Localities payload: {}", payload);
            Ok(Json(payload))
        }
        Err(err) => {
            error!("Failed to fetch localities: {}", err);
            Err(gateway_failure(err, "Failed to fetch localities"))
        }
    }
}
