//! # Public Key Validation
//!
//! Checks a raw 64-byte `x ‖ y` secp256k1 key before it may become the
//! authorized signer.
//!
//! The curve is pinned to secp256k1, y² = x³ + 7 over the field with
//! p = 2^256 − 2^32 − 977. A coordinate of `0` or `p` is zero in the field
//! and reported as `Zero`; any other coordinate `≥ p`, or a point off the
//! curve, is `NotOnCurve`.

use crate::algorithms::ecdsa::address_from_coordinates;
use crate::domain::errors::PublicKeyError;
use k256::ecdsa::VerifyingKey;
use shared_types::Address;

/// Raw public key length: x (32) ‖ y (32).
pub const PUBLIC_KEY_LENGTH: usize = 64;

/// secp256k1 field prime p
const SECP256K1_FIELD_PRIME: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

/// Validate a raw key and return it as a fixed array.
pub fn validate_public_key(bytes: &[u8]) -> Result<[u8; PUBLIC_KEY_LENGTH], PublicKeyError> {
    if bytes.len() != PUBLIC_KEY_LENGTH {
        return Err(PublicKeyError::WrongLength { got: bytes.len() });
    }

    let (x, y) = bytes.split_at(32);
    if is_zero_in_field(x) || is_zero_in_field(y) {
        return Err(PublicKeyError::Zero);
    }

    let mut sec1 = [0u8; PUBLIC_KEY_LENGTH + 1];
    sec1[0] = 0x04;
    sec1[1..].copy_from_slice(bytes);
    // Rejects coordinates >= p and points off the curve
    VerifyingKey::from_sec1_bytes(&sec1).map_err(|_| PublicKeyError::NotOnCurve)?;

    let mut key = [0u8; PUBLIC_KEY_LENGTH];
    key.copy_from_slice(bytes);
    Ok(key)
}

/// Validate a raw key and derive its address.
pub fn public_key_to_address(bytes: &[u8]) -> Result<Address, PublicKeyError> {
    let key = validate_public_key(bytes)?;
    Ok(address_from_coordinates(&key))
}

fn is_zero_in_field(coordinate: &[u8]) -> bool {
    coordinate.iter().all(|b| *b == 0) || coordinate == &SECP256K1_FIELD_PRIME[..]
}
