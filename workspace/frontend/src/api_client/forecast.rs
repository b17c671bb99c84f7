use super::{get, post};
use common::{
    combine_forecasts, CombinedForecast, ForecastQuery, LocalitiesResponse, PredictionResult,
};

/// Localities in the order the predictor lists them
pub async fn get_localities() -> Result<Vec<String>, String> {
    log::debug!("Fetching localities");
    let response: LocalitiesResponse = get("/localities").await?;
    log::debug!("Loaded {} localities", response.localities.len());
    Ok(response.localities)
}

/// Linear and polynomial forecasts for one submission.
///
/// Both predict calls are sent at once; either one failing fails the whole
/// forecast.
pub async fn predict(query: &ForecastQuery) -> Result<CombinedForecast, String> {
    log::debug!(
        "Requesting forecast for {} (base year {:?})",
        query.locality,
        query.base_year
    );

    combine_forecasts(query, |request| async move {
        post::<PredictionResult, _>("/predict", &request).await
    })
    .await
}
