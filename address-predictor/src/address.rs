//! Parsing and EIP-55 checksum formatting of account addresses

use std::str::FromStr;

use alloy_primitives::Address;

use crate::{
    constants::{HEX_PREFIX, NUM_HEX_CHARS_ADDRESS},
    errors::PredictionError,
};

/// Parse a hex-encoded account address.
///
/// Accepts lowercase or uppercase input with or without the `0x` prefix.
/// Mixed-case input is taken to be checksummed and must validate as such.
pub fn parse_address(address: &str) -> Result<Address, PredictionError> {
    let hex_digits = address.strip_prefix(HEX_PREFIX).unwrap_or(address);
    if hex_digits.len() != NUM_HEX_CHARS_ADDRESS {
        return Err(PredictionError::Encoding(format!(
            "expected {} hex characters, got {}: {}",
            NUM_HEX_CHARS_ADDRESS,
            hex_digits.len(),
            address
        )));
    }

    let parsed =
        Address::from_str(hex_digits).map_err(|e| PredictionError::Encoding(e.to_string()))?;

    let has_lower = hex_digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex_digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum(&parsed)[HEX_PREFIX.len()..] != *hex_digits {
        return Err(PredictionError::Encoding(format!(
            "invalid address checksum: {}",
            address
        )));
    }

    Ok(parsed)
}

/// Format an address in its EIP-55 mixed-case checksum form
pub fn to_checksum(address: &Address) -> String {
    address.to_checksum(None /* chain_id */)
}

/// Whether the string is an address already in its canonical checksum form
pub fn is_checksummed(address: &str) -> bool {
    parse_address(address).is_ok_and(|parsed| to_checksum(&parsed) == address)
}

#[cfg(test)]
mod tests {
    use super::{is_checksummed, parse_address, to_checksum};
    use crate::errors::PredictionError;

    /// The first default account of a local development node, checksummed
    const DEV_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_parse_any_uniform_case() {
        let checksummed = parse_address(DEV_ACCOUNT).unwrap();
        let lower = parse_address(&DEV_ACCOUNT.to_lowercase()).unwrap();
        let upper = parse_address(&format!("0x{}", DEV_ACCOUNT[2..].to_uppercase())).unwrap();
        let unprefixed = parse_address(&DEV_ACCOUNT[2..]).unwrap();

        assert_eq!(checksummed, lower);
        assert_eq!(checksummed, upper);
        assert_eq!(checksummed, unprefixed);
    }

    #[test]
    fn test_reject_bad_checksum() {
        // Flip the case of the first letter
        let tampered = DEV_ACCOUNT.replacen("f39F", "F39F", 1);
        assert!(matches!(
            parse_address(&tampered),
            Err(PredictionError::Encoding(_))
        ));
    }

    #[test]
    fn test_reject_malformed() {
        for bad in ["", "0x", "0x1234", "0xzz9Fd6e51aad88F6F4ce6aB8827279cffFb92266"] {
            assert!(matches!(
                parse_address(bad),
                Err(PredictionError::Encoding(_))
            ));
        }

        // 21 bytes
        let too_long = format!("{DEV_ACCOUNT}00");
        assert!(parse_address(&too_long).is_err());
    }

    #[test]
    fn test_checksum_round_trip() {
        let address = parse_address(&DEV_ACCOUNT.to_lowercase()).unwrap();
        let checksummed = to_checksum(&address);

        assert_eq!(checksummed, DEV_ACCOUNT);
        assert!(is_checksummed(&checksummed));
        assert!(!is_checksummed(&DEV_ACCOUNT.to_lowercase()));
    }
}
