use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json, BoxError};
use gateway::GatewayError;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Message for a request that lacks locality or model_type
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: locality or model_type";

/// 400 for a request rejected before reaching the predictor
pub fn validation_error(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// Message for a body that is JSON but does not fit the request shape
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// 400 for a body the JSON extractor refused.
///
/// A request that is not declared as JSON counts as an empty body, so it
/// fails the same way as one without the required fields.
pub fn json_rejection(rejection: JsonRejection) -> ApiError {
    warn!("Rejected request body: {}", rejection.body_text());
    match rejection {
        JsonRejection::MissingJsonContentType(_) => validation_error(MISSING_FIELDS_MESSAGE),
        other => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_details(INVALID_BODY_MESSAGE, other.body_text())),
        ),
    }
}

/// 500 for a request cut off by the optional server-side timeout
pub async fn timeout_failure(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        error!("Request exceeded the configured timeout");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Request timed out")),
        )
    } else {
        error!("Unhandled middleware error: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::with_details("Internal server error", err.to_string())),
        )
    }
}

/// Map a gateway failure to its HTTP response.
///
/// `failure_message` is the headline used when the predictor process
/// itself failed (e.g. "Prediction failed").
pub fn gateway_failure(err: GatewayError, failure_message: &str) -> ApiError {
    match err {
        GatewayError::Rejected(message) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
        }
        GatewayError::Execution { code, stderr } => {
            error!("{}: predictor exited with {:?}", failure_message, code);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(failure_message, stderr)),
            )
        }
        GatewayError::InvalidResponse { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Invalid response from prediction engine")),
        ),
        GatewayError::Spawn(io_error) => {
            error!("Prediction engine could not be started: {}", io_error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Prediction engine could not be started",
                    io_error.to_string(),
                )),
            )
        }
        GatewayError::Serialize(serde_error) => {
            error!("Failed to encode predictor task: {}", serde_error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to encode predictor task")),
            )
        }
    }
}
