//! Deterministic deployment address computation
//!
//! Matches the chain's CREATE2 rule:
//!   address = keccak256(0xff || deployer (20) || salt (32) || init_code_hash (32))[12..32]
//!
//! The salt arriving here is already the keccak of the canonical pool
//! parameters; it is never hashed a second time.

use alloy::primitives::{Address, B256, keccak256};

/// The chain's address-derivation rule. One production implementation;
/// pluggable so the engine can be exercised against fixed vectors.
pub trait AddressScheme {
    fn derive(&self, deployer: Address, salt: B256, init_code_hash: B256) -> Address;
}

/// Production CREATE2 scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Create2Scheme;

impl AddressScheme for Create2Scheme {
    fn derive(&self, deployer: Address, salt: B256, init_code_hash: B256) -> Address {
        let mut preimage = [0u8; 85];
        preimage[0] = 0xff;
        preimage[1..21].copy_from_slice(deployer.as_slice());
        preimage[21..53].copy_from_slice(salt.as_slice());
        preimage[53..85].copy_from_slice(init_code_hash.as_slice());

        let hash = keccak256(preimage);
        Address::from_slice(&hash[12..])
    }
}

/// Derives the predicted deployment address with the production scheme.
pub fn derive(deployer: Address, salt: B256, init_code_hash: B256) -> Address {
    Create2Scheme.derive(deployer, salt, init_code_hash)
}

/// The subsystem's sole correctness oracle: byte equality, no normalization.
pub fn verify(predicted: Address, observed: Address) -> bool {
    predicted == observed
}
