//! Pool Address Verifier - Deterministic CREATE2 address derivation for
//! library-linked Uniswap V3 pool deployments
//!
//! Predicts the on-chain address a pool will be deployed at from the factory
//! address, the canonical pool parameters, and the pool init code hash, then
//! checks the prediction against the chain. The init code hash is not a
//! constant here: pool bytecode links against separately deployed libraries
//! whose addresses depend on the deployer account and nonce, so the hash is
//! recomputed per deployment session.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod encoder;
pub mod initcode;
pub mod derivation;
pub mod verifier;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{VerifierError, VerifierResult};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
