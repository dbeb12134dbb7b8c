//! A fixed-width RLP encoder for the `[sender, nonce]` list hashed by the
//! `CREATE` opcode.
//!
//! The encoding is assembled directly into a stack buffer sized for the
//! largest possible nonce, so no intermediate hex strings are involved.

use alloy_primitives::{keccak256, Address, B256};

use crate::constants::{
    MAX_CREATE_PREIMAGE_LEN, NUM_BYTES_ADDRESS, RLP_LIST_OFFSET, RLP_MAX_SHORT_PAYLOAD,
    RLP_STRING_OFFSET,
};

/// The RLP encoding of `[sender, nonce]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreatePreimage {
    /// The backing buffer, of which only the first `len` bytes are meaningful
    buf: [u8; MAX_CREATE_PREIMAGE_LEN],
    /// The length of the encoding
    len: usize,
}

impl CreatePreimage {
    /// Encode the `[sender, nonce]` list
    pub fn new(sender: &Address, nonce: u64) -> Self {
        let nonce_bytes = nonce.to_be_bytes();
        // A zero nonce strips down to the empty string
        let nonce_be = &nonce_bytes[(nonce.leading_zeros() / 8) as usize..];

        let payload_len = 1 + NUM_BYTES_ADDRESS + encoded_string_len(nonce_be);
        debug_assert!(payload_len <= RLP_MAX_SHORT_PAYLOAD);

        let mut buf = [0u8; MAX_CREATE_PREIMAGE_LEN];
        buf[0] = RLP_LIST_OFFSET + payload_len as u8;

        let mut cursor = 1;
        cursor += write_string(&mut buf[cursor..], sender.as_slice());
        cursor += write_string(&mut buf[cursor..], nonce_be);
        debug_assert_eq!(cursor, 1 + payload_len);

        Self { buf, len: cursor }
    }

    /// The encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The Keccak-256 digest of the encoding
    pub fn hash(&self) -> B256 {
        keccak256(self.as_bytes())
    }
}

impl AsRef<[u8]> for CreatePreimage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Whether the string is a single byte that encodes as itself
fn is_self_encoding(bytes: &[u8]) -> bool {
    matches!(bytes, [b] if *b < RLP_STRING_OFFSET)
}

/// The length of the short-form RLP encoding of `bytes`
fn encoded_string_len(bytes: &[u8]) -> usize {
    if is_self_encoding(bytes) {
        1
    } else {
        1 + bytes.len()
    }
}

/// Writes the short-form RLP encoding of `bytes` to the front of `out`,
/// returning the number of bytes written.
///
/// Callers guarantee `bytes` is at most 55 bytes long.
fn write_string(out: &mut [u8], bytes: &[u8]) -> usize {
    if is_self_encoding(bytes) {
        out[0] = bytes[0];
        return 1;
    }

    out[0] = RLP_STRING_OFFSET + bytes.len() as u8;
    out[1..=bytes.len()].copy_from_slice(bytes);
    1 + bytes.len()
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, hex, Address};

    use super::CreatePreimage;
    use crate::constants::MAX_CREATE_PREIMAGE_LEN;

    /// The first default account of a local development node
    const DEV_ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn test_zero_nonce_is_empty_string() {
        let preimage = CreatePreimage::new(&DEV_ACCOUNT, 0);
        assert_eq!(
            preimage.as_bytes(),
            hex!("d694f39fd6e51aad88f6f4ce6ab8827279cfffb9226680")
        );
    }

    #[test]
    fn test_single_byte_nonces() {
        let one = CreatePreimage::new(&DEV_ACCOUNT, 1);
        assert_eq!(one.as_bytes()[0], 0xd6);
        assert_eq!(one.as_bytes()[22..], [0x01u8]);

        let max_single = CreatePreimage::new(&DEV_ACCOUNT, 0x7f);
        assert_eq!(max_single.as_bytes()[22..], [0x7fu8]);
    }

    #[test]
    fn test_prefixed_nonces() {
        let nonce = CreatePreimage::new(&DEV_ACCOUNT, 0x80);
        assert_eq!(nonce.as_bytes()[0], 0xd7);
        assert_eq!(nonce.as_bytes()[22..], [0x81u8, 0x80]);

        let nonce = CreatePreimage::new(&DEV_ACCOUNT, 0x0100);
        assert_eq!(nonce.as_bytes()[0], 0xd8);
        assert_eq!(nonce.as_bytes()[22..], [0x82u8, 0x01, 0x00]);
    }

    #[test]
    fn test_max_nonce_fills_buffer() {
        let preimage = CreatePreimage::new(&DEV_ACCOUNT, u64::MAX);
        let bytes = preimage.as_bytes();

        assert_eq!(bytes.len(), MAX_CREATE_PREIMAGE_LEN);
        assert_eq!(bytes[0], 0xde);
        assert_eq!(bytes[22], 0x88);
        assert!(bytes[23..].iter().all(|b| *b == 0xff));
    }
}
