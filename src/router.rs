use crate::handlers::{
    health::{health_check, root},
    localities::get_localities,
    predict::{predict, predict_trend},
};
use crate::helpers::responses::timeout_failure;
use crate::schemas::{ApiDoc, AppState};
use axum::{
    error_handling::HandleErrorLayer,
    http::Method,
    routing::{get, post},
    Router,
};
use axum_prometheus::PrometheusMetricLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Router options that depend on configuration
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Upper bound for handling a single request. `None` lets a request
    /// wait for the predictor as long as it runs.
    pub request_timeout: Option<Duration>,
    /// Mount /metrics. The Prometheus recorder is process-global, so this
    /// must be enabled for at most one router per process.
    pub metrics_enabled: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            request_timeout: None,
            metrics_enabled: false,
        }
    }
}

/// Create application router with all routes and middleware
pub fn create_router(state: AppState, options: RouterOptions) -> Router {
    let mut router = Router::new()
        // Health checks
        .route("/", get(root))
        .route("/health", get(health_check))
        // Forecast API
        .route("/api/localities", get(get_localities))
        .route("/api/predict", post(predict))
        .route("/api/predict_trend", post(predict_trend))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if options.metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route("/metrics", get(move || async move { metric_handle.render() }))
            .layer(prometheus_layer);
    }

    if let Some(timeout) = options.request_timeout {
        router = router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(timeout_failure))
                .timeout(timeout),
        );
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
