//! Constants used in encoding contract-creation preimages

/// The number of bytes it takes to represent an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The number of hex characters in an unprefixed Ethereum address
pub const NUM_HEX_CHARS_ADDRESS: usize = NUM_BYTES_ADDRESS * 2;

/// The number of bytes it takes to represent a u64
pub const NUM_BYTES_U64: usize = 8;

/// The number of bytes in a Keccak-256 digest
pub const NUM_BYTES_HASH: usize = 32;

/// The prefix marking a hex-encoded address
pub const HEX_PREFIX: &str = "0x";

/// The RLP prefix offset for a byte string of at most 55 bytes.
///
/// A single byte below this value is its own encoding.
pub const RLP_STRING_OFFSET: u8 = 0x80;

/// The RLP prefix offset for a list whose payload is at most 55 bytes
pub const RLP_LIST_OFFSET: u8 = 0xc0;

/// The largest payload that still fits the short RLP string / list forms
pub const RLP_MAX_SHORT_PAYLOAD: usize = 55;

/// The length of the longest possible `[sender, nonce]` encoding:
/// list header, address header + address, nonce header + 8 nonce bytes
pub const MAX_CREATE_PREIMAGE_LEN: usize = 1 + (1 + NUM_BYTES_ADDRESS) + (1 + NUM_BYTES_U64);
