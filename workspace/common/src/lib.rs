//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the API's request/response payloads so the
//! frontend can deserialize responses without duplicating shapes.

mod fetch_state;
mod forecast;
mod money;

pub use fetch_state::FetchState;
pub use forecast::{
    ChartRow, CombinedForecast, ForecastQuery, ForecastSummary, chart_rows, combine_forecasts,
};
pub use money::{format_inr, format_lakhs};

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Regression model used by the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Linear,
    Polynomial,
}

impl ModelType {
    pub const ALL: [ModelType; 2] = [ModelType::Linear, ModelType::Polynomial];

    /// Wire value sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Linear => "linear",
            ModelType::Polynomial => "polynomial",
        }
    }

    /// Legend label used in charts
    pub fn label(&self) -> &'static str {
        match self {
            ModelType::Linear => "Linear Trend",
            ModelType::Polynomial => "Polynomial Forecast (Degree 3)",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===================== Requests =====================

/// Body of a predict call as sent by the browser client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionRequest {
    /// Locality name, as returned by the localities listing
    pub locality: String,
    /// Regression model to apply
    pub model_type: ModelType,
    /// First forecast year; the predictor picks its own default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_year: Option<i32>,
}

// ===================== Responses =====================

/// Localities known to the predictor, in predictor order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct LocalitiesResponse {
    pub localities: Vec<String>,
}

/// One (year, price) point of a price series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PricePoint {
    pub year: i32,
    pub price: f64,
}

/// Predictor payload for a single model.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionResult {
    /// Forecast covering five years from the base year
    pub predicted_data: Vec<PricePoint>,
    /// Observed prices the model was fitted on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub historical_data: Vec<PricePoint>,
    /// Human readable model name reported by the predictor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
}

/// Error body returned by every failing API call.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Diagnostic detail (e.g. predictor stderr)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
