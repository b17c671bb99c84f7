use common::{LocalitiesResponse, ModelType, PredictionRequest, PredictionResult, PricePoint};
use gateway::Predictor;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

pub use common::ErrorResponse;

use crate::handlers::predict::PredictRequest;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Engine answering localities and predict tasks
    pub predictor: Arc<dyn Predictor>,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Configured prediction engine
    pub predictor: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::health::root,
        crate::handlers::localities::get_localities,
        crate::handlers::predict::predict,
        crate::handlers::predict::predict_trend,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            LocalitiesResponse,
            PredictRequest,
            PredictionRequest,
            PredictionResult,
            PricePoint,
            ModelType,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "localities", description = "Locality listing"),
        (name = "forecast", description = "Price forecasting"),
    ),
    info(
        title = "Real Estate Forecast API",
        description = "Five-year real-estate price forecasts per locality, backed by an external regression engine",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
