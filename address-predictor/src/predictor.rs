//! Prediction of the vault and strategy addresses from the deployer's nonce.
//!
//! The vault is created with the deployer's current pending nonce and the
//! strategy with the nonce after it, so each can be constructed with the
//! other's address. The prediction is only valid until the deployer sends
//! another transaction.

use std::{
    fmt::{self, Display},
    future::Future,
};

use alloy_primitives::Address;
use tracing::debug;

use crate::{
    address::{parse_address, to_checksum},
    constants::{NUM_BYTES_ADDRESS, NUM_BYTES_HASH},
    errors::PredictionError,
    rlp::CreatePreimage,
};

/// Read access to an account's transaction count
pub trait NonceSource {
    /// Fetch the pending transaction count of the given account
    fn pending_nonce(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<u64, PredictionError>> + Send;
}

/// The addresses of the next two contracts created by a deployer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PredictedAddresses {
    /// The deployer
    pub creator: Address,
    /// The deployer's nonce at the time of prediction
    pub nonce: u64,
    /// The address of the contract created at `nonce`
    pub vault: Address,
    /// The address of the contract created at `nonce + 1`
    pub strategy: Address,
}

impl PredictedAddresses {
    /// The checksummed vault address
    pub fn vault_checksummed(&self) -> String {
        to_checksum(&self.vault)
    }

    /// The checksummed strategy address
    pub fn strategy_checksummed(&self) -> String {
        to_checksum(&self.strategy)
    }
}

impl Display for PredictedAddresses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vault: {}, strategy: {}",
            self.vault_checksummed(),
            self.strategy_checksummed()
        )
    }
}

/// Compute the address of the contract `creator` deploys with `nonce`
pub fn contract_address(creator: &Address, nonce: u64) -> Address {
    let digest = CreatePreimage::new(creator, nonce).hash();
    Address::from_slice(&digest.as_slice()[NUM_BYTES_HASH - NUM_BYTES_ADDRESS..])
}

/// Predict the vault and strategy addresses given the deployer's current nonce
pub fn predict_from_nonce(
    creator: Address,
    nonce: u64,
) -> Result<PredictedAddresses, PredictionError> {
    let next_nonce = nonce.checked_add(1).ok_or_else(|| {
        PredictionError::Encoding(format!("nonce {} has no successor", nonce))
    })?;

    Ok(PredictedAddresses {
        creator,
        nonce,
        vault: contract_address(&creator, nonce),
        strategy: contract_address(&creator, next_nonce),
    })
}

/// Read the deployer's pending nonce from `source` and predict the vault and
/// strategy addresses.
///
/// The address is validated before the nonce is requested.
pub async fn predict_addresses<S: NonceSource>(
    source: &S,
    creator: &str,
) -> Result<PredictedAddresses, PredictionError> {
    let creator = parse_address(creator)?;
    let nonce = source.pending_nonce(creator).await?;
    debug!("{} has pending nonce {}", creator, nonce);

    let predicted = predict_from_nonce(creator, nonce)?;
    debug!("predicted {}", predicted);

    Ok(predicted)
}
