//! Definitions of CLI arguments and commands for the vault scripts

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{list_configs, predict, show_config, wire},
    constants::{DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_RPC_URL},
    errors::ScriptError,
    utils::{setup_provider, RpcNonceSource},
};

/// Predict and wire the addresses of vault/strategy deployments
#[derive(Parser)]
pub struct Cli {
    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Seconds to wait on the RPC node before giving up
    #[arg(long, default_value_t = DEFAULT_RPC_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available commands
#[derive(Subcommand)]
pub enum Command {
    /// Predict the addresses of the deployer's next two contracts
    Predict(PredictArgs),
    /// Predict the addresses of a configured vault/strategy pair and encode
    /// their constructor arguments
    Wire(WireArgs),
    /// Print a deployment configuration
    ShowConfig(ShowConfigArgs),
    /// List the identifiers of all deployment configurations
    ListConfigs,
}

impl Command {
    /// Run the command against the node at `rpc_url`
    pub async fn run(self, rpc_url: &str, timeout: Duration) -> Result<(), ScriptError> {
        match self {
            Command::Predict(args) => {
                let source = RpcNonceSource::new(setup_provider(rpc_url)?, timeout);
                predict(args, &source).await.map(|_| ())
            }
            Command::Wire(args) => {
                let source = RpcNonceSource::new(setup_provider(rpc_url)?, timeout);
                wire(args, &source).await.map(|_| ())
            }
            Command::ShowConfig(args) => show_config(args),
            Command::ListConfigs => {
                list_configs();
                Ok(())
            }
        }
    }
}

/// The account whose upcoming contract creations are predicted
#[derive(Args, Clone, Default)]
pub struct DeployerArgs {
    /// Address of the deployer, checksummed or lowercase hex
    #[arg(short, long)]
    pub creator: Option<String>,

    /// Private key of the deployer, used when no creator address is given
    #[arg(short, long, env = "PKEY")]
    pub priv_key: Option<String>,
}

/// Predict the addresses of the deployer's next two contracts
#[derive(Args, Clone, Default)]
pub struct PredictArgs {
    /// The deployer
    #[command(flatten)]
    pub deployer: DeployerArgs,
}

/// Predict the addresses of a configured vault/strategy pair.
///
/// The vault is expected to be created first, at the deployer's current
/// nonce, and the strategy immediately after it.
#[derive(Args, Clone)]
pub struct WireArgs {
    /// The identifier of the deployment configuration
    #[arg(long, env = "CONFIG_ID")]
    pub config_id: String,

    /// The deployer
    #[command(flatten)]
    pub deployer: DeployerArgs,

    /// Path to a deployments file in which to record the predicted addresses
    #[arg(short, long)]
    pub deployments_path: Option<PathBuf>,
}

/// Print a deployment configuration
#[derive(Args, Clone)]
pub struct ShowConfigArgs {
    /// The identifier of the deployment configuration
    #[arg(long, env = "CONFIG_ID")]
    pub config_id: String,
}
