use soroban_sdk::{Bytes, BytesN, Env};

/// Canonical blinded bid: `keccak256(value as 16-byte big-endian || secret)`.
///
/// Clients must reproduce this encoding exactly. Any other encoding produces
/// a different digest and the reveal is treated as a forfeited mismatch.
pub fn digest(env: &Env, value: i128, secret: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &value.to_be_bytes());
    preimage.extend_from_array(&secret.to_array());
    env.crypto().keccak256(&preimage).to_bytes()
}

/// Marker written over a revealed commitment.
pub fn zeroed(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

/// A stored commitment can only be opened while it is non-zero.
pub fn matches(env: &Env, stored: &BytesN<32>, value: i128, secret: &BytesN<32>) -> bool {
    *stored != zeroed(env) && *stored == digest(env, value, secret)
}
