//! Utilities for the vault scripts.

use std::{fs, future::IntoFuture, path::Path, str::FromStr, time::Duration};

use address_predictor::{address::to_checksum, NonceSource, PredictedAddresses, PredictionError};
use alloy::{
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolConstructor;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};
use tracing::debug;

use crate::{
    config::DeploymentConfig,
    constants::{
        DEPLOYER_KEY, DEPLOYMENTS_FILE_INDENT, DEPLOYMENTS_KEY, NONCE_KEY, STRATEGY_CONTRACT_KEY,
        VAULT_CONTRACT_KEY,
    },
    errors::ScriptError,
    solidity::{StrategyContract, VaultContract},
};

/// A [`NonceSource`] reading pending transaction counts from an RPC node,
/// giving up after a fixed timeout
pub struct RpcNonceSource<P> {
    /// The provider connected to the node
    provider: P,
    /// How long to wait on the node for a single read
    timeout: Duration,
}

impl<P: Provider> RpcNonceSource<P> {
    /// Wrap a provider
    pub fn new(provider: P, timeout: Duration) -> Self {
        Self { provider, timeout }
    }
}

impl<P: Provider> NonceSource for RpcNonceSource<P> {
    async fn pending_nonce(&self, address: Address) -> Result<u64, PredictionError> {
        let request = self
            .provider
            .get_transaction_count(address)
            .pending()
            .into_future();

        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| {
                PredictionError::Network(format!(
                    "no response from node within {}ms",
                    self.timeout.as_millis()
                ))
            })?
            .map_err(|e| PredictionError::Network(e.to_string()))
    }
}

/// Sets up a read-only provider for the node at the given RPC url
pub fn setup_provider(rpc_url: &str) -> Result<impl Provider, ScriptError> {
    let url =
        Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    Ok(ProviderBuilder::new().on_http(url))
}

/// Resolve the deployer address, either given directly or as the account
/// behind a private key
pub fn resolve_creator(
    creator: Option<String>,
    priv_key: Option<String>,
) -> Result<String, ScriptError> {
    if let Some(creator) = creator {
        return Ok(creator);
    }

    let priv_key = priv_key.ok_or_else(|| {
        ScriptError::ClientInitialization(
            "either a creator address or a private key is required".to_string(),
        )
    })?;
    let signer = PrivateKeySigner::from_str(&priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    Ok(to_checksum(&signer.address()))
}

/// Returns the vault and strategy addresses of a wired configuration
fn wired_addresses(config: &DeploymentConfig) -> Result<(Address, Address), ScriptError> {
    let vault = config
        .vault_address
        .ok_or(ScriptError::MissingAddress("vault address"))?;
    let strategy = config
        .strategy_address
        .ok_or(ScriptError::MissingAddress("strategy address"))?;

    if vault == strategy {
        return Err(ScriptError::InvalidWiring(format!(
            "vault and strategy share address {}",
            to_checksum(&vault)
        )));
    }

    Ok((vault, strategy))
}

/// Prepare the ABI-encoded constructor arguments of the vault contract
pub fn vault_constructor_args(config: &DeploymentConfig) -> Result<Vec<u8>, ScriptError> {
    let (_, strategy) = wired_addresses(config)?;

    Ok(VaultContract::constructorCall {
        strategy,
        name: config.vault_name.clone(),
        symbol: config.vault_symbol.clone(),
    }
    .abi_encode())
}

/// Prepare the ABI-encoded constructor arguments of the strategy contract.
///
/// A missing pool id encodes as zero and a missing masterchef as the zero
/// address.
pub fn strategy_constructor_args(config: &DeploymentConfig) -> Result<Vec<u8>, ScriptError> {
    let (vault, _) = wired_addresses(config)?;
    let platform = &config.platform;

    Ok(StrategyContract::constructorCall {
        want: config.input,
        output: config.output,
        pid: U256::from(config.pid.unwrap_or_default()),
        keeper: platform.keeper,
        strategist: platform.strategist,
        unirouter: platform.unirouter,
        vault,
        harvester: platform.harvester,
        masterchef: platform.masterchef.unwrap_or_default(),
    }
    .abi_encode())
}

/// Read and parse the deployments file.
///
/// A missing or blank file reads as an empty object.
fn read_deployments(file_path: &Path) -> Result<Value, ScriptError> {
    if !file_path.exists() {
        return Ok(Value::Object(Map::new()));
    }

    let contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
    if contents.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_str(&contents).map_err(|e| ScriptError::Serde(e.to_string()))
}

/// Record the predicted addresses of a deployment in the deployments file,
/// creating the file if it does not exist
pub fn write_predicted_addresses(
    file_path: &Path,
    config_id: &str,
    predicted: &PredictedAddresses,
) -> Result<(), ScriptError> {
    let mut parsed_json = read_deployments(file_path)?;

    let entry = parsed_json
        .as_object_mut()
        .and_then(|root| {
            root.entry(DEPLOYMENTS_KEY)
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
        })
        .and_then(|deployments| {
            deployments
                .entry(config_id)
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
        })
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!(
                "{} is not a deployments file",
                file_path.display()
            ))
        })?;

    entry.insert(
        DEPLOYER_KEY.to_string(),
        Value::String(to_checksum(&predicted.creator)),
    );
    entry.insert(NONCE_KEY.to_string(), Value::from(predicted.nonce));
    entry.insert(
        VAULT_CONTRACT_KEY.to_string(),
        Value::String(predicted.vault_checksummed()),
    );
    entry.insert(
        STRATEGY_CONTRACT_KEY.to_string(),
        Value::String(predicted.strategy_checksummed()),
    );

    let mut contents = Vec::new();
    let formatter = PrettyFormatter::with_indent(DEPLOYMENTS_FILE_INDENT);
    let mut serializer = Serializer::with_formatter(&mut contents, formatter);
    parsed_json
        .serialize(&mut serializer)
        .map_err(|e| ScriptError::Serde(e.to_string()))?;

    fs::write(file_path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    debug!("wrote {} addresses to {}", config_id, file_path.display());

    Ok(())
}

/// Read one contract address of a deployment back from the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &Path,
    config_id: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = read_deployments(file_path)?;

    let addr_str = parsed_json[DEPLOYMENTS_KEY][config_id][contract_key]
        .as_str()
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!(
                "no {} recorded for {}",
                contract_key, config_id
            ))
        })?;

    Address::from_str(addr_str).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}
