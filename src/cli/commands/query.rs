use anyhow::{Context, Result};
use gateway::{Predictor, PredictorTask};
use std::path::Path;
use tracing::{debug, info};

use crate::config::{build_predictor, load_config};

/// Print the predictor's localities as pretty JSON
pub async fn list_localities(config_path: Option<&Path>) -> Result<()> {
    run_task(config_path, PredictorTask::GetLocalities).await
}

/// Print a single forecast as pretty JSON
pub async fn predict_once(
    config_path: Option<&Path>,
    locality: String,
    model_type: String,
    base_year: Option<i32>,
) -> Result<()> {
    run_task(config_path, PredictorTask::predict(locality, model_type, base_year)).await
}

async fn run_task(config_path: Option<&Path>, task: PredictorTask) -> Result<()> {
    let config = load_config(config_path)?;
    let predictor = build_predictor(&config.predictor)?;
    debug!("Running task {:?} with {}", task, predictor.describe());

    let payload = predictor
        .run(&task)
        .await
        .with_context(|| format!("Task '{}' failed", task.name()))?;

    info!("Task '{}' completed", task.name());
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
