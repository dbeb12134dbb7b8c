//! Definitions of errors that can occur during the execution of the vault scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use address_predictor::PredictionError;

/// Errors that can occur during the execution of the vault scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading the deployments file
    ReadDeployments(String),
    /// Error writing the deployments file
    WriteDeployments(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error fetching the nonce of the deployer
    NonceFetching(String),
    /// Error encoding an address or nonce into a creation preimage
    Encoding(String),
    /// No deployment configuration exists under the given identifier
    UnknownConfig(String),
    /// The deployment configuration has not been wired with the named address
    MissingAddress(&'static str),
    /// The vault and strategy addresses of a configuration are inconsistent
    InvalidWiring(String),
    /// Error de/serializing a configuration or deployments file
    Serde(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::NonceFetching(s) => write!(f, "error fetching nonce: {}", s),
            ScriptError::Encoding(s) => write!(f, "error encoding creation preimage: {}", s),
            ScriptError::UnknownConfig(s) => write!(f, "no deployment config for id: {}", s),
            ScriptError::MissingAddress(s) => write!(f, "deployment config is missing {}", s),
            ScriptError::InvalidWiring(s) => write!(f, "invalid vault/strategy wiring: {}", s),
            ScriptError::Serde(s) => write!(f, "error de/serializing: {}", s),
        }
    }
}

impl Error for ScriptError {}

impl From<PredictionError> for ScriptError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::Network(s) => ScriptError::NonceFetching(s),
            PredictionError::Encoding(s) => ScriptError::Encoding(s),
        }
    }
}
