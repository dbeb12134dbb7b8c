//! Implementations of the vault scripts

use address_predictor::{predict_addresses, NonceSource, PredictedAddresses};
use alloy_primitives::hex;
use tracing::{info, warn};

use crate::{
    cli::{PredictArgs, ShowConfigArgs, WireArgs},
    config::{deployment_config, deployment_ids, DeploymentConfig},
    errors::ScriptError,
    utils::{
        resolve_creator, strategy_constructor_args, vault_constructor_args,
        write_predicted_addresses,
    },
};

/// Predict the addresses of the deployer's next two contracts
pub async fn predict(
    args: PredictArgs,
    source: &impl NonceSource,
) -> Result<PredictedAddresses, ScriptError> {
    let creator = resolve_creator(args.deployer.creator, args.deployer.priv_key)?;
    let predicted = predict_addresses(source, &creator).await?;

    info!("Deployer {} is at nonce {}", predicted.creator, predicted.nonce);
    info!("Next contract (nonce {}): {}", predicted.nonce, predicted.vault_checksummed());
    info!(
        "Following contract (nonce {}): {}",
        predicted.nonce + 1,
        predicted.strategy_checksummed()
    );

    Ok(predicted)
}

/// Predict the addresses of a configured vault/strategy pair, wire them into
/// the configuration and encode both contracts' constructor arguments.
///
/// Either both contracts are wired or the command fails; no partially wired
/// configuration is ever recorded.
pub async fn wire(
    args: WireArgs,
    source: &impl NonceSource,
) -> Result<DeploymentConfig, ScriptError> {
    let config = deployment_config(&args.config_id)?;
    let creator = resolve_creator(args.deployer.creator, args.deployer.priv_key)?;
    let predicted = predict_addresses(source, &creator).await?;

    let config = config.with_predicted_addresses(&predicted);
    let vault_args = vault_constructor_args(&config)?;
    let strategy_args = strategy_constructor_args(&config)?;

    info!(
        "{} ({}) will deploy at {} with nonce {}",
        config.vault_contract_name,
        config.vault_symbol,
        predicted.vault_checksummed(),
        predicted.nonce
    );
    info!("Vault constructor args: {}", hex::encode_prefixed(&vault_args));
    info!(
        "{} will deploy at {} with nonce {}",
        config.strat_contract_name,
        predicted.strategy_checksummed(),
        predicted.nonce + 1
    );
    info!("Strategy constructor args: {}", hex::encode_prefixed(&strategy_args));
    warn!(
        "These addresses hold only if {} sends no other transaction before both deployments",
        predicted.creator
    );

    if let Some(deployments_path) = args.deployments_path {
        write_predicted_addresses(&deployments_path, &args.config_id, &predicted)?;
        info!("Recorded predicted addresses in {}", deployments_path.display());
    }

    Ok(config)
}

/// Print a deployment configuration as JSON
pub fn show_config(args: ShowConfigArgs) -> Result<(), ScriptError> {
    let config = deployment_config(&args.config_id)?;
    let json =
        serde_json::to_string_pretty(&config).map_err(|e| ScriptError::Serde(e.to_string()))?;

    println!("{json}");
    Ok(())
}

/// Print the identifiers of all deployment configurations
pub fn list_configs() {
    for id in deployment_ids() {
        println!("{id}");
    }
}
