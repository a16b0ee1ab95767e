//! Verifier configuration settings and environment variable handling

use alloy::primitives::{Address, B256};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;
use std::fs;

use crate::initcode::{BytecodeTemplate, InitCodeHashSource};
use crate::types::{
    DEFAULT_FEE_TIER, FACTORY_MAINNET, POOL_INIT_CODE_HASH_MAINNET, USDC_MAINNET, WETH_MAINNET,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub network: String,
    pub rpc_url: Option<String>,
    pub factory_address: Address,
    // Pool under verification
    pub token_a: Address,
    pub token_b: Address,
    pub fee: u32,
    // Init code hash strategy: artifact path selects dynamic resolution,
    // otherwise the static hash is used
    pub static_init_code_hash: B256,
    pub pool_artifact_path: Option<String>,
    pub libraries: HashMap<String, Address>,
    // Optional on-chain probe contract reporting the ground-truth hash
    pub probe_address: Option<Address>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            network: env::var("NETWORK")
                .unwrap_or_else(|_| "mainnet".to_string()),
            rpc_url: env::var("RPC_URL").ok(),
            factory_address: env::var("FACTORY_ADDRESS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(FACTORY_MAINNET),
            token_a: env::var("TOKEN_A")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(WETH_MAINNET),
            token_b: env::var("TOKEN_B")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(USDC_MAINNET),
            fee: env::var("FEE_TIER")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_FEE_TIER),
            static_init_code_hash: env::var("POOL_INIT_CODE_HASH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(POOL_INIT_CODE_HASH_MAINNET),
            pool_artifact_path: env::var("POOL_ARTIFACT_PATH").ok(),
            libraries: env::var("LIBRARY_ADDRESSES")
                .ok()
                .map(|s| parse_library_addresses(&s))
                .unwrap_or_default(),
            probe_address: env::var("PROBE_ADDRESS")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }

    /// Builds the configured hash source. An artifact path means the pool
    /// bytecode is library-linked and the hash must be resolved dynamically;
    /// without one the static hash applies.
    pub fn init_code_hash_source(&self) -> Result<InitCodeHashSource> {
        match &self.pool_artifact_path {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read pool artifact at {}", path))?;
                let template = BytecodeTemplate::from_artifact(&json)
                    .with_context(|| format!("Failed to parse pool artifact at {}", path))?;
                Ok(InitCodeHashSource::Dynamic(template))
            }
            None => Ok(InitCodeHashSource::Static(self.static_init_code_hash)),
        }
    }
}

/// Parses `Name=0x...,Name=0x...` pairs. Entries that do not parse are
/// skipped, matching how the other env fallbacks behave.
fn parse_library_addresses(raw: &str) -> HashMap<String, Address> {
    raw.split(',')
        .filter_map(|entry| {
            let (name, addr) = entry.split_once('=')?;
            let address: Address = addr.trim().parse().ok()?;
            Some((name.trim().to_string(), address))
        })
        .collect()
}
