//! Scripts for predicting and wiring the addresses of vault/strategy
//! deployments.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
mod solidity;
pub mod utils;
