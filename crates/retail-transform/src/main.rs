//! Retail Transform - export one product batch as sink-ready JSON

use anyhow::{Context, Result};
use clap::Parser;
use retail_common::logging::{init_logging, LogConfig};
use retail_transform::{config::DatabaseConfig, db, output, pipeline, store::PgProductStore};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "retail-transform")]
#[command(
    author,
    version,
    about = "Export a batch of catalog products with their authors as JSON"
)]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    let log_config = LogConfig::builder()
        .log_file_prefix("retail-transform")
        .filter_directives("sqlx=warn")
        .build();

    let log_config = match log_config.merge_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid logging configuration: {err}");
            return ExitCode::FAILURE;
        },
    };

    let _guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to initialize logging: {err:#}");
            return ExitCode::FAILURE;
        },
    };

    match export().await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            error!(error = %format!("{err:#}"), "Product export failed");
            ExitCode::FAILURE
        },
    }
}

async fn export() -> Result<String> {
    let config = DatabaseConfig::load().context("Failed to load database configuration")?;
    let pool = db::connect(&config)
        .await
        .context("Failed to connect to the catalog database")?;
    info!("Connected to catalog database");

    let store = PgProductStore::new(pool.clone());
    let result = pipeline::run(&store).await;
    pool.close().await;

    let records = result.context("Failed to transform products")?;
    output::to_json_pretty(&records).context("Failed to serialize records")
}
