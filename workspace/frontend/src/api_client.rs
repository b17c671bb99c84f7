pub mod forecast;

use crate::settings;
use common::ErrorResponse;
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use std::future::Future;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Race a request against the configured timeout
async fn with_timeout<F>(method: &str, endpoint: &str, request: F) -> Result<Response, String>
where
    F: Future<Output = Result<Response, gloo_net::Error>>,
{
    let timeout_ms = settings::get_settings().request_timeout_ms;
    let request = Box::pin(request);
    let timer = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(request, timer).await {
        Either::Left((Ok(response), _)) => Ok(response),
        Either::Left((Err(e), _)) => {
            let error_msg = format!("Request failed: {}", e);
            log::error!("{} {} - {}", method, endpoint, error_msg);
            Err(error_msg)
        }
        Either::Right(_) => {
            let error_msg = format!("Request timed out after {} ms", timeout_ms);
            log::error!("{} {} - {}", method, endpoint, error_msg);
            Err(error_msg)
        }
    }
}

/// Turn a response into the payload, or into the API's error message
async fn read_body<T>(method: &str, endpoint: &str, response: Response) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                match &err.details {
                    Some(details) => log::error!(
                        "{} {} - API error: {} ({})",
                        method,
                        endpoint,
                        err.error,
                        details
                    ),
                    None => log::error!("{} {} - API error: {}", method, endpoint, err.error),
                }
                format!("Error: {}", err.error)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("{} {} - {}", method, endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let body: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("{} {} - {}", method, endpoint, error_msg);
        error_msg
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(body)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = with_timeout("GET", endpoint, Request::get(&url).send()).await?;
    read_body("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let request = Request::post(&url).json(body).map_err(|e| {
        let error_msg = format!("Failed to serialize request: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    let response = with_timeout("POST", endpoint, request.send()).await?;
    read_body("POST", endpoint, response).await
}
