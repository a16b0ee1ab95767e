//! Canonical pool parameter encoding
//!
//! Produces the exact salt preimage the factory hashes when it deploys a
//! pool: `abi.encode(token0, token1, fee)`. The layout must be bit-exact -
//! one byte of difference yields a completely different salt and therefore a
//! completely different pool address.

use alloy::primitives::{B256, keccak256};

use crate::types::PoolKey;

/// Byte length of the ABI-encoded (token0, token1, fee) tuple.
pub const ENCODED_LEN: usize = 96;

/// ABI-encodes the canonical pool parameters: three 32-byte words, each
/// value right-aligned big-endian, no separators.
pub fn encode(key: &PoolKey) -> [u8; ENCODED_LEN] {
    let mut buf = [0u8; ENCODED_LEN];
    buf[12..32].copy_from_slice(key.token0().as_slice());
    buf[44..64].copy_from_slice(key.token1().as_slice());
    buf[92..96].copy_from_slice(&key.fee().to_be_bytes());
    buf
}

/// The CREATE2 salt for a pool: keccak256 of the canonical encoding.
pub fn salt(key: &PoolKey) -> B256 {
    keccak256(encode(key))
}
