use std::future::Future;

use futures::future::try_join;
use serde::{Deserialize, Serialize};

use crate::{ModelType, PredictionRequest, PredictionResult, PricePoint};

/// What the user submits: a locality and an optional base year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastQuery {
    pub locality: String,
    pub base_year: Option<i32>,
}

impl ForecastQuery {
    pub fn new(locality: impl Into<String>, base_year: Option<i32>) -> Self {
        Self {
            locality: locality.into(),
            base_year,
        }
    }

    /// Predict request for one model, identical otherwise
    pub fn request_for(&self, model_type: ModelType) -> PredictionRequest {
        PredictionRequest {
            locality: self.locality.clone(),
            model_type,
            base_year: self.base_year,
        }
    }
}

/// Linear and polynomial forecasts for the same submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedForecast {
    pub linear: PredictionResult,
    pub polynomial: PredictionResult,
}

impl CombinedForecast {
    pub fn get(&self, model_type: ModelType) -> &PredictionResult {
        match model_type {
            ModelType::Linear => &self.linear,
            ModelType::Polynomial => &self.polynomial,
        }
    }
}

/// Issue the linear and polynomial predict calls concurrently and join them.
///
/// `fetch` performs a single predict call. Both calls are in flight at the
/// same time; the combined forecast only exists once both have succeeded,
/// and the first failure fails the whole operation.
pub async fn combine_forecasts<F, Fut, E>(
    query: &ForecastQuery,
    fetch: F,
) -> Result<CombinedForecast, E>
where
    F: Fn(PredictionRequest) -> Fut,
    Fut: Future<Output = Result<PredictionResult, E>>,
{
    let linear = fetch(query.request_for(ModelType::Linear));
    let polynomial = fetch(query.request_for(ModelType::Polynomial));

    let (linear, polynomial) = try_join(linear, polynomial).await?;

    Ok(CombinedForecast { linear, polynomial })
}

/// Headline numbers shown above the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSummary {
    pub highest: f64,
    pub lowest: f64,
    /// Growth from the first to the last forecast year, in percent.
    /// `None` when the first price is zero.
    pub growth_pct: Option<f64>,
}

impl ForecastSummary {
    /// Summarise a series; `None` for an empty series
    pub fn from_series(series: &[PricePoint]) -> Option<Self> {
        let first = series.first()?;
        let last = series.last()?;

        let highest = series.iter().map(|p| p.price).fold(f64::MIN, f64::max);
        let lowest = series.iter().map(|p| p.price).fold(f64::MAX, f64::min);
        let growth_pct = if first.price == 0.0 {
            None
        } else {
            Some((last.price - first.price) / first.price * 100.0)
        };

        Some(Self {
            highest,
            lowest,
            growth_pct,
        })
    }

    /// The polynomial series is the headline forecast
    pub fn from_forecast(forecast: &CombinedForecast) -> Option<Self> {
        Self::from_series(&forecast.polynomial.predicted_data)
    }
}

/// One x-axis position of the forecast chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRow {
    pub year: i32,
    /// Polynomial price, rounded to whole rupees
    pub polynomial: f64,
    /// Linear price for the same year, rounded, if the linear series has one
    pub linear: Option<f64>,
}

/// Chart rows keyed by the polynomial forecast's years.
pub fn chart_rows(forecast: &CombinedForecast) -> Vec<ChartRow> {
    forecast
        .polynomial
        .predicted_data
        .iter()
        .map(|point| ChartRow {
            year: point.year,
            polynomial: point.price.round(),
            linear: forecast
                .linear
                .predicted_data
                .iter()
                .find(|l| l.year == point.year)
                .map(|l| l.price.round()),
        })
        .collect()
}
