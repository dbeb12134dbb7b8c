use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vault_scripts::{cli::Cli, constants::DEFAULT_LOG_FILTER, errors::ScriptError};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        rpc_url,
        timeout_secs,
        command,
    } = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().pretty().with_env_filter(filter).init();

    command
        .run(&rpc_url, Duration::from_secs(timeout_secs))
        .await
}
