use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error};

use crate::config::{initialize_app_state, load_config};
use crate::router::{create_router, RouterOptions};

/// Command-line values that take precedence over the configuration
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub bind_address: Option<String>,
    pub python: Option<PathBuf>,
    pub predictor_script: Option<PathBuf>,
}

pub async fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> Result<()> {
    trace!("Entering serve function");
    info!("Real estate forecast API starting up");

    let mut config = load_config(config_path)?;
    if let Some(bind_address) = overrides.bind_address {
        config.bind_address = bind_address;
    }
    if let Some(python) = overrides.python {
        config.predictor.interpreter = Some(python);
    }
    if let Some(script) = overrides.predictor_script {
        config.predictor.script = script;
    }
    debug!("Effective configuration: {:?}", config);

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(&config) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let options = RouterOptions {
        request_timeout: config.request_timeout_secs.map(Duration::from_secs),
        metrics_enabled: config.metrics_enabled,
    };
    let app = create_router(state, options);
    debug!("Router created successfully");

    // Start server
    let bind_address = config.bind_address;
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Forecast API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
