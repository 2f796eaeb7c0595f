use dotenvy::dotenv;
use std::env;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod models;
mod services;
mod suites;
mod types;
mod utils;

#[cfg(test)]
mod tests;

use services::runner_service::Runner;
use utils::logging::DashFormat;
use utils::report::write_report;

/// Ok(true) when every case passed.
async fn run() -> Result<bool, anyhow::Error> {
    let cfg = config::AppConfig::from_env()?;
    let state = cfg.build_state()?;

    let cases = suites::countries::collect(&state.cases_path, state.response_bound).await;
    let runner = Runner::new(state.fetcher.clone(), state.max_failures);
    let report = runner.run(&cases).await;

    if let Err(e) = write_report(&report, &state.report_path).await {
        error!("report write failed: {}", e);
    } else {
        info!("report written to {}", state.report_path.display());
    }
    info!("{}", report.summary());

    Ok(report.success())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().event_format(DashFormat))
        .init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("configuration error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
