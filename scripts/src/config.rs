//! The static table of vault/strategy deployment configurations.
//!
//! Each lookup returns a fresh owned [`DeploymentConfig`], so one invocation
//! can wire its copy without affecting any other.

use address_predictor::PredictedAddresses;
use alloy_primitives::{address, Address};
use serde::Serialize;

use crate::errors::ScriptError;

/// The identifier of the Omnidex WBTC-TLOS vault on Telos
pub const OMNIDEX_WBTC_TLOS: &str = "omnidex-wbtc-tlos";

/// The identifier of the SpookySwap BOO-FTM vault used against a Fantom fork
pub const SPOOKY_BOO_FTM_FORK: &str = "spooky-boo-ftm-fork";

/// The identifiers of every known deployment configuration
pub const DEPLOYMENT_IDS: [&str; 2] = [OMNIDEX_WBTC_TLOS, SPOOKY_BOO_FTM_FORK];

/// The identifiers of every known deployment configuration, in table order
pub fn deployment_ids() -> &'static [&'static str] {
    &DEPLOYMENT_IDS
}

/// The platform accounts and contracts a strategy operates against
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Platform {
    /// The account allowed to harvest the strategy
    pub harvester: Address,
    /// The DEX router used to swap rewards
    pub unirouter: Address,
    /// The account receiving the strategist fee
    pub strategist: Address,
    /// The account allowed to manage the strategy
    pub keeper: Address,
    /// The farm contract the strategy stakes into, if it needs one at construction
    pub masterchef: Option<Address>,
}

/// A vault/strategy pair to be deployed
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeploymentConfig {
    /// The token deposited into the vault
    pub input: Address,
    /// The reward token the strategy harvests
    pub output: Address,
    /// The farm pool id the strategy stakes into
    pub pid: Option<u64>,
    /// The name of the strategy contract artifact
    pub strat_contract_name: String,
    /// The name of the vault contract artifact
    pub vault_contract_name: String,
    /// The ERC20 name of the vault share token
    pub vault_name: String,
    /// The ERC20 symbol of the vault share token
    pub vault_symbol: String,
    /// Whether the target chain's explorer supports source verification
    pub supports_verify: bool,
    /// The vault address, once predicted
    pub vault_address: Option<Address>,
    /// The strategy address, once predicted
    pub strategy_address: Option<Address>,
    /// The platform the strategy operates against
    #[serde(flatten)]
    pub platform: Platform,
}

impl DeploymentConfig {
    /// Returns a copy of this configuration wired with the predicted vault
    /// and strategy addresses
    pub fn with_predicted_addresses(self, predicted: &PredictedAddresses) -> Self {
        Self {
            vault_address: Some(predicted.vault),
            strategy_address: Some(predicted.strategy),
            ..self
        }
    }

    /// Whether both the vault and strategy addresses have been filled in
    pub fn is_wired(&self) -> bool {
        self.vault_address.is_some() && self.strategy_address.is_some()
    }
}

/// Look up the deployment configuration with the given identifier
pub fn deployment_config(id: &str) -> Result<DeploymentConfig, ScriptError> {
    match id {
        OMNIDEX_WBTC_TLOS => Ok(omnidex_wbtc_tlos()),
        SPOOKY_BOO_FTM_FORK => Ok(spooky_boo_ftm_fork()),
        _ => Err(ScriptError::UnknownConfig(id.to_string())),
    }
}

/// The Omnidex WBTC-TLOS LP vault
fn omnidex_wbtc_tlos() -> DeploymentConfig {
    let operator = address!("Def1ffF6D3a78e30b772B8BC9f8a7BDea06C520D");

    DeploymentConfig {
        input: address!("427E9A7bb848444a72faA3248c48F3B302429725"),
        output: address!("d2504a02fABd7E546e41aD39597c377cA8B0E1Df"),
        pid: Some(4),
        strat_contract_name: "MesoOmniStrategyLP".to_string(),
        vault_contract_name: "MesoOmniVaultV2".to_string(),
        vault_name: "MESOBTCTLOS Vault".to_string(),
        vault_symbol: "MESOBTCTLOS".to_string(),
        supports_verify: false,
        vault_address: None,
        strategy_address: None,
        platform: Platform {
            harvester: address!("2E36C8c81664062654D81d5d29af80FC90145e7C"),
            unirouter: address!("F9678db1CE83f6f51E5df348E2Cc842Ca51EfEc1"),
            strategist: operator,
            keeper: operator,
            masterchef: None,
        },
    }
}

/// The SpookySwap BOO-FTM LP vault, operated by the first development
/// account of a local Fantom fork
fn spooky_boo_ftm_fork() -> DeploymentConfig {
    let operator = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

    DeploymentConfig {
        input: address!("Ec7178F4C41f346b2721907F5cF7628E388A7a58"),
        output: address!("841FAD6EAe12c286d1Fd18d1d525DFfA75C7EFFE"),
        pid: Some(0),
        strat_contract_name: "MesoFTMStrategyLP".to_string(),
        vault_contract_name: "MesoFTMVaultV2".to_string(),
        vault_name: "Meso Fork Test Vault".to_string(),
        vault_symbol: "MESOFORKTEST".to_string(),
        supports_verify: false,
        vault_address: None,
        strategy_address: None,
        platform: Platform {
            harvester: operator,
            unirouter: address!("F491e7B69E4244ad4002BC14e878a34207E38c29"),
            strategist: operator,
            keeper: operator,
            masterchef: Some(address!("2b2929E785374c651a81A63878Ab22742656DcDd")),
        },
    }
}
