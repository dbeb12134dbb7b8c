//! Tests of recording predicted addresses in a deployments file

use std::{fs, path::PathBuf};

use address_predictor::predict_from_nonce;
use alloy_primitives::Address;
use eyre::Result;
use vault_scripts::{
    config::{OMNIDEX_WBTC_TLOS, SPOOKY_BOO_FTM_FORK},
    constants::{STRATEGY_CONTRACT_KEY, VAULT_CONTRACT_KEY},
    errors::ScriptError,
    utils::{parse_addr_from_deployments_file, write_predicted_addresses},
};

/// A fresh deployments file path unique to this process and test
fn deployments_path(test_name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "vault-deployments-{}-{}.json",
        std::process::id(),
        test_name
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_write_then_read() -> Result<()> {
    let path = deployments_path("write_then_read");
    let predicted = predict_from_nonce(Address::repeat_byte(0x11), 3)?;

    write_predicted_addresses(&path, OMNIDEX_WBTC_TLOS, &predicted)?;

    let vault = parse_addr_from_deployments_file(&path, OMNIDEX_WBTC_TLOS, VAULT_CONTRACT_KEY)?;
    let strategy =
        parse_addr_from_deployments_file(&path, OMNIDEX_WBTC_TLOS, STRATEGY_CONTRACT_KEY)?;
    assert_eq!(vault, predicted.vault);
    assert_eq!(strategy, predicted.strategy);

    // Addresses are stored checksummed
    let contents = fs::read_to_string(&path)?;
    assert!(contents.contains(&predicted.vault_checksummed()));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_other_deployments_preserved() -> Result<()> {
    let path = deployments_path("other_deployments_preserved");
    let first = predict_from_nonce(Address::repeat_byte(0x22), 0)?;
    let second = predict_from_nonce(Address::repeat_byte(0x33), 9)?;

    write_predicted_addresses(&path, OMNIDEX_WBTC_TLOS, &first)?;
    write_predicted_addresses(&path, SPOOKY_BOO_FTM_FORK, &second)?;

    let omnidex_vault =
        parse_addr_from_deployments_file(&path, OMNIDEX_WBTC_TLOS, VAULT_CONTRACT_KEY)?;
    let spooky_vault =
        parse_addr_from_deployments_file(&path, SPOOKY_BOO_FTM_FORK, VAULT_CONTRACT_KEY)?;
    assert_eq!(omnidex_vault, first.vault);
    assert_eq!(spooky_vault, second.vault);

    // A later prediction replaces the earlier one
    let updated = predict_from_nonce(Address::repeat_byte(0x22), 2)?;
    write_predicted_addresses(&path, OMNIDEX_WBTC_TLOS, &updated)?;
    let omnidex_vault =
        parse_addr_from_deployments_file(&path, OMNIDEX_WBTC_TLOS, VAULT_CONTRACT_KEY)?;
    assert_eq!(omnidex_vault, updated.vault);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_missing_entry() -> Result<()> {
    let path = deployments_path("missing_entry");
    let predicted = predict_from_nonce(Address::repeat_byte(0x44), 0)?;
    write_predicted_addresses(&path, OMNIDEX_WBTC_TLOS, &predicted)?;

    assert!(matches!(
        parse_addr_from_deployments_file(&path, SPOOKY_BOO_FTM_FORK, VAULT_CONTRACT_KEY),
        Err(ScriptError::ReadDeployments(_))
    ));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_non_object_file_rejected() -> Result<()> {
    let path = deployments_path("non_object_file_rejected");
    fs::write(&path, "[]")?;
    let predicted = predict_from_nonce(Address::repeat_byte(0x55), 0)?;

    assert!(matches!(
        write_predicted_addresses(&path, OMNIDEX_WBTC_TLOS, &predicted),
        Err(ScriptError::ReadDeployments(_))
    ));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_blank_file_treated_as_missing() -> Result<()> {
    let path = deployments_path("blank_file_treated_as_missing");
    let predicted = predict_from_nonce(Address::repeat_byte(0x66), 1)?;

    for blank in ["", " \n\t\n"] {
        fs::write(&path, blank)?;
        write_predicted_addresses(&path, SPOOKY_BOO_FTM_FORK, &predicted)?;

        let vault =
            parse_addr_from_deployments_file(&path, SPOOKY_BOO_FTM_FORK, VAULT_CONTRACT_KEY)?;
        assert_eq!(vault, predicted.vault);
    }

    fs::remove_file(&path)?;
    Ok(())
}
