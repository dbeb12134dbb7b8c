//! Constants used in the vault scripts

/// The RPC URL used when none is supplied, a local development node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The number of seconds to wait on the RPC node before giving up
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

/// The log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// The deployments key in the deployments file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The vault contract key in the deployments file
pub const VAULT_CONTRACT_KEY: &str = "vault_contract";

/// The strategy contract key in the deployments file
pub const STRATEGY_CONTRACT_KEY: &str = "strategy_contract";

/// The deployer key in the deployments file
pub const DEPLOYER_KEY: &str = "deployer";

/// The deployer nonce key in the deployments file
pub const NONCE_KEY: &str = "nonce";

/// The indentation of the pretty-printed deployments file
pub const DEPLOYMENTS_FILE_INDENT: &[u8] = b"    ";
