//! decision-ranker - Evaluate a request file and print the JSON report.
//!
//! Usage: `decision-ranker <request.yaml>`
//!
//! Logs go to stderr; stdout carries only the report.

use std::env;
use std::process::ExitCode;

use tracing::{error, info};

use decision_ranker::adapters::FileRequestLoader;
use decision_ranker::application::EvaluationService;
use decision_ranker::config::{AppConfig, ConfigError};
use decision_ranker::domain::foundation::{DomainError, ErrorCode};

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.logging.init_tracing() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let Some(path) = env::args().nth(1) else {
        error!("Usage: decision-ranker <request.yaml>");
        return ExitCode::FAILURE;
    };

    match run(&config, &path) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = %e.code, path = %path, "{}", e.message);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn run(config: &AppConfig, path: &str) -> Result<String, DomainError> {
    let request = FileRequestLoader::new(path).load()?;

    info!(
        path,
        method = %request.method.unwrap_or(config.analysis.scoring_method),
        "Evaluating request"
    );

    let report = EvaluationService::new(config.analysis.clone()).evaluate(request)?;

    serde_json::to_string_pretty(&report).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Failed to serialize report: {}", e),
        )
    })
}
