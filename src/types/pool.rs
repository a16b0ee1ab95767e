//! Pool-identifying types

use alloy::primitives::Address;
use serde::Serialize;

use crate::errors::{VerifierError, VerifierResult};

/// Canonical identity of a pool: the two tokens it trades plus its fee tier.
///
/// The constructor sorts the tokens ascending by byte value, so (A, B) and
/// (B, A) build the same key and every key is canonical by construction.
/// Fields stay private to keep that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PoolKey {
    token0: Address,
    token1: Address,
    fee: u32,
}

impl PoolKey {
    pub fn new(token_a: Address, token_b: Address, fee: u32) -> VerifierResult<Self> {
        if token_a == token_b {
            return Err(VerifierError::InvalidPair { token: token_a });
        }
        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        Ok(Self { token0, token1, fee })
    }

    pub fn token0(&self) -> Address {
        self.token0
    }

    pub fn token1(&self) -> Address {
        self.token1
    }

    pub fn fee(&self) -> u32 {
        self.fee
    }
}

impl std::fmt::Display for PoolKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} @ {}", self.token0, self.token1, self.fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn sorts_tokens_ascending() {
        let a = address!("0000000000000000000000000000000000000002");
        let b = address!("0000000000000000000000000000000000000001");
        let key = PoolKey::new(a, b, 3000).unwrap();
        assert_eq!(key.token0(), b);
        assert_eq!(key.token1(), a);
    }

    #[test]
    fn order_independent() {
        let a = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
        let b = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        assert_eq!(
            PoolKey::new(a, b, 500).unwrap(),
            PoolKey::new(b, a, 500).unwrap()
        );
    }

    #[test]
    fn rejects_identical_tokens() {
        let a = address!("0000000000000000000000000000000000000001");
        let err = PoolKey::new(a, a, 3000).unwrap_err();
        assert!(matches!(err, VerifierError::InvalidPair { token } if token == a));
    }
}
