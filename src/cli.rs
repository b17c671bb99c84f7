use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{list_localities, predict_once, serve, ServeOverrides};

#[derive(Parser)]
#[command(name = "realty-forecast")]
#[command(about = "Real-estate price forecasting API backed by an external prediction engine")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    ///
    /// Defaults to ./realty-forecast.{toml,yaml,json} when present.
    #[arg(short, long, global = true, env = "REALTY_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:5000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Python interpreter used to run the predictor
        #[arg(long)]
        python: Option<PathBuf>,

        /// Path to the predictor script
        #[arg(long)]
        predictor_script: Option<PathBuf>,
    },
    /// Ask the predictor for its localities and print the JSON result
    Localities,
    /// Run a single forecast through the predictor and print the JSON result
    Predict {
        /// Locality to forecast
        #[arg(short, long)]
        locality: String,

        /// Regression model
        #[arg(short, long, value_parser = ["linear", "polynomial"])]
        model_type: String,

        /// First forecast year
        #[arg(short, long)]
        base_year: Option<i32>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = self.config.as_deref();
        match self.command {
            Commands::Serve { bind_address, python, predictor_script } => {
                let overrides = ServeOverrides { bind_address, python, predictor_script };
                serve(config, overrides).await?;
            }
            Commands::Localities => {
                list_localities(config).await?;
            }
            Commands::Predict { locality, model_type, base_year } => {
                predict_once(config, locality, model_type, base_year).await?;
            }
        }
        Ok(())
    }
}
