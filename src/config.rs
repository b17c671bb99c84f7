use anyhow::{Context, Result};
use config::{Config, Environment, File};
use gateway::ProcessPredictor;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Default config file looked up in the working directory (extension optional)
const DEFAULT_CONFIG_FILE: &str = "realty-forecast";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to (IP:PORT)
    pub bind_address: String,
    /// Upper bound for a single HTTP request, in seconds. Unset means
    /// requests wait for the predictor to finish.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Expose Prometheus metrics on /metrics
    pub metrics_enabled: bool,
    /// External predictor invocation
    pub predictor: PredictorConfig,
}

/// How to launch the external predictor
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// Python interpreter; resolved automatically when absent
    pub interpreter: Option<PathBuf>,
    /// Predictor script, relative to the project root unless absolute
    pub script: PathBuf,
    /// Working directory for the predictor process
    pub working_dir: Option<PathBuf>,
}

/// Bind address used when nothing is configured.
///
/// Hosting platforms hand out the port through `PORT`.
fn default_bind_address() -> String {
    std::env::var("PORT")
        .map(|port| format!("0.0.0.0:{}", port))
        .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
}

/// Load configuration: defaults, then the config file, then `REALTY_*`
/// environment variables (`__` separates nested keys).
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut builder = Config::builder()
        .set_default("bind_address", default_bind_address())?
        .set_default("metrics_enabled", true)?
        .set_default("predictor.script", "ml/predict.py")?;

    builder = match path {
        Some(path) => {
            debug!("Loading configuration file {}", path.display());
            builder.add_source(File::from(path).required(true))
        }
        None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
    };

    let settings = builder
        .add_source(
            Environment::with_prefix("REALTY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read configuration")?;

    settings
        .try_deserialize()
        .context("Invalid configuration")
}

/// Build the predictor described by the configuration
pub fn build_predictor(config: &PredictorConfig) -> Result<ProcessPredictor> {
    let project_root = std::env::current_dir().context("Cannot determine working directory")?;
    let mut predictor =
        ProcessPredictor::python_script(config.interpreter.clone(), &config.script, &project_root);
    if let Some(dir) = &config.working_dir {
        predictor = predictor.working_dir(dir);
    }
    Ok(predictor)
}

/// Initialize application state
pub fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    let predictor = build_predictor(&config.predictor)?;
    info!("Prediction engine: {}", gateway::Predictor::describe(&predictor));

    Ok(AppState {
        predictor: Arc::new(predictor),
    })
}
