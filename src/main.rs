mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{ArgParser, SubCommand};
use logan::{
    client::{AnalyzerBackend, BulkJobLogs, HttpBackend, JobLog},
    config,
    submitter::{FormSubmitter, LogFields},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

async fn read_stream(inline: String, file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read log file {}", path.display())),
        None => Ok(inline),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ArgParser::parse();

    // Load configuration first (before logging setup)
    let loaded = match &args.config {
        Some(path) => config::load_from(path).await,
        None => config::load().await,
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    // Validate log level
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Initialize tracing with the determined log level. Logs go to stderr;
    // stdout carries only the rendered response.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut backend_config = config.backend.clone();
    if let Some(server) = args.server {
        backend_config.base_url = server;
    }

    info!("Using analysis backend at {}", backend_config.base_url);

    let backend: Arc<dyn AnalyzerBackend> = Arc::new(HttpBackend::new(backend_config));

    match args.sub_command {
        SubCommand::Analyze {
            stderr,
            stderr_file,
            stdout,
            stdout_file,
            exit_code,
        } => {
            let fields = LogFields {
                stderr: read_stream(stderr, stderr_file).await?,
                stdout: read_stream(stdout, stdout_file).await?,
                exit_code,
            };

            let mut submitter = FormSubmitter::new(backend);
            if let Err(e) = submitter.submit(&fields).await {
                eprintln!("{}", e.user_notice());
                std::process::exit(1);
            }

            if submitter.panel().is_visible() {
                println!("{}", submitter.panel().output());
            }
        }
        SubCommand::Summarize { jobs } => {
            let raw = tokio::fs::read_to_string(&jobs)
                .await
                .with_context(|| format!("Failed to read job file {}", jobs.display()))?;
            let jobs: Vec<JobLog> = serde_json::from_str(&raw)
                .context("Job file must hold a JSON array of job records")?;

            match backend.summarize(&BulkJobLogs { jobs }).await {
                Ok(response) => println!("{}", serde_json::to_string_pretty(&response)?),
                Err(e) => {
                    eprintln!("{}", e.user_notice());
                    std::process::exit(1);
                }
            }
        }
        SubCommand::Health => match backend.health().await {
            Ok(response) => println!("{}", serde_json::to_string_pretty(&response)?),
            Err(e) => {
                eprintln!("{}", e.user_notice());
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
