//! Network addresses and known deployment constants

use alloy::primitives::{Address, B256, address, b256};

// Ethereum mainnet constants
pub const FACTORY_MAINNET: Address = address!("1F98431c8aD98523631AE4a59f267346ea31F984");
pub const WETH_MAINNET: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
pub const USDC_MAINNET: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// Init code hash of the canonical (unlinked) mainnet pool bytecode. Only
/// valid for deployments whose bytecode carries no library references.
pub const POOL_INIT_CODE_HASH_MAINNET: B256 =
    b256!("e34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54");

// Fee tiers enabled on the factory at genesis
pub const FEE_TIERS: &[u32] = &[500, 3000, 10000];

pub const DEFAULT_FEE_TIER: u32 = 3000;
