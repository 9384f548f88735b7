//! # Core Entities
//!
//! Fixed-width primitives used in signed payloads and ledger keys.
//!
//! ## Conventions
//!
//! - Numbers are 256-bit words encoded big-endian in 32 bytes.
//! - Zero is the "none" sentinel for words and addresses alike.

use crate::errors::ParseError;

// Re-export U256 from primitive-types for use across the workspace
pub use primitive_types::U256;

/// A 32-byte hash (keccak256 output or a packed word).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// The all-zero address (the "null" target).
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// The all-zero hash.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Encode a 256-bit value as a 32-byte big-endian word.
pub fn u256_to_word(value: &U256) -> Hash {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Decode a 32-byte big-endian word.
pub fn word_to_u256(word: &Hash) -> U256 {
    U256::from_big_endian(word)
}

/// Whether an address is the null address.
pub fn is_zero_address(address: &Address) -> bool {
    address == &ZERO_ADDRESS
}

/// Decode hex (with or without `0x`) into exactly `N` bytes.
pub fn parse_fixed_hex<const N: usize>(input: &str) -> Result<[u8; N], ParseError> {
    let bytes = parse_hex(input)?;
    if bytes.len() != N {
        return Err(ParseError::WrongLength {
            expected: N,
            got: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Decode hex (with or without `0x`) into a byte vector.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, ParseError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| ParseError::InvalidHex(e.to_string()))
}

/// Parse a 20-byte address from hex.
pub fn parse_address(input: &str) -> Result<Address, ParseError> {
    parse_fixed_hex::<20>(input)
}

/// Parse a 32-byte hash from hex.
pub fn parse_hash(input: &str) -> Result<Hash, ParseError> {
    parse_fixed_hex::<32>(input)
}

/// Parse a 256-bit word from decimal, or from hex when prefixed with `0x`.
pub fn parse_u256(input: &str) -> Result<U256, ParseError> {
    let trimmed = input.trim();
    if let Some(digits) = trimmed.strip_prefix("0x") {
        let padded = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_string()
        };
        let bytes =
            hex::decode(&padded).map_err(|e| ParseError::InvalidHex(e.to_string()))?;
        if bytes.len() > 32 {
            return Err(ParseError::InvalidInteger(trimmed.to_string()));
        }
        return Ok(U256::from_big_endian(&bytes));
    }
    U256::from_dec_str(trimmed).map_err(|_| ParseError::InvalidInteger(trimmed.to_string()))
}

/// Render bytes as `0x`-prefixed lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
