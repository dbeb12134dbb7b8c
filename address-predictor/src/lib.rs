//! Prediction of the addresses a deployer's upcoming contract creations will
//! be assigned, used to wire a vault and its strategy together before either
//! one exists on-chain.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod address;
pub mod constants;
pub mod errors;
pub mod predictor;
pub mod rlp;

pub use errors::PredictionError;
pub use predictor::{
    contract_address, predict_addresses, predict_from_nonce, NonceSource, PredictedAddresses,
};
