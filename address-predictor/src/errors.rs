//! Definitions of errors that can occur while predicting contract addresses

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur while predicting contract addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    /// The deployer's nonce could not be read from the network
    Network(String),
    /// The input could not be encoded into a creation preimage
    Encoding(String),
}

impl Display for PredictionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PredictionError::Network(s) => write!(f, "network error: {}", s),
            PredictionError::Encoding(s) => write!(f, "encoding error: {}", s),
        }
    }
}

impl Error for PredictionError {}
