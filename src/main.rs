//! Entry point for the Guard Payroll binary.
//!
//! Running this binary starts an HTTP server that exposes the payroll
//! engine.  The bind address is read from `PAYROLL_BIND_ADDR` and an
//! optional JSON rules file from `PAYROLL_RULES_FILE`; logging is
//! controlled with `RUST_LOG`.

use anyhow::Result;
use guard_payroll::config::ServiceConfig;
use guard_payroll::rules::PayrollRules;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guard_payroll=info".into()),
        )
        .init();

    let config = ServiceConfig::from_env();
    let rules = match &config.rules_file {
        Some(path) => PayrollRules::load_from_file(path)?,
        None => PayrollRules::default(),
    };
    tracing::info!(?rules, "starting guard payroll service");

    guard_payroll::api::serve(&config.bind_addr, rules).await
}
