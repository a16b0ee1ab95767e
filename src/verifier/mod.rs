//! Verification pipeline: encode -> resolve -> derive -> compare

pub mod report;

pub use report::*;

use alloy::primitives::{Address, B256};
use tracing::debug;

use crate::derivation;
use crate::encoder;
use crate::errors::{VerifierError, VerifierResult};
use crate::initcode::InitCodeHashSource;
use crate::types::{DeploymentContext, PoolKey};

/// Predicts the address the factory will deploy this pool at. No chain
/// access; everything needed is in the context and the hash source.
pub fn derive_pool_address(
    key: &PoolKey,
    context: &DeploymentContext,
    source: &InitCodeHashSource,
) -> VerifierResult<Address> {
    let salt = encoder::salt(key);
    let init_code_hash = source.resolve(context)?;
    let predicted = derivation::derive(context.deployer(), salt, init_code_hash);
    debug!(pool = %key, %salt, %init_code_hash, %predicted, "Derived pool address");
    Ok(predicted)
}

/// Full verification run. Fails fast on the first error: an invalid pair,
/// an unresolved library, or a prediction that does not match the observed
/// address. None of these are retryable - a mismatch means a configuration
/// or library-linking bug, not a transient fault.
pub fn verify_pool_address(
    token_a: Address,
    token_b: Address,
    fee: u32,
    context: &DeploymentContext,
    source: &InitCodeHashSource,
    observed: Address,
) -> VerifierResult<VerificationReport> {
    let key = PoolKey::new(token_a, token_b, fee)?;
    let salt = encoder::salt(&key);
    let init_code_hash = source.resolve(context)?;
    let predicted = derivation::derive(context.deployer(), salt, init_code_hash);

    if !derivation::verify(predicted, observed) {
        return Err(VerifierError::VerificationMismatch {
            predicted: predicted.to_string(),
            observed: observed.to_string(),
        });
    }

    Ok(VerificationReport::new(
        key,
        context.deployer(),
        salt,
        init_code_hash,
        predicted,
        observed,
    ))
}

/// Same oracle applied to the hash itself, for checking a resolved hash
/// against the one an on-chain probe contract reports.
pub fn verify_init_code_hash(resolved: B256, observed: B256) -> VerifierResult<()> {
    if resolved != observed {
        return Err(VerifierError::VerificationMismatch {
            predicted: resolved.to_string(),
            observed: observed.to_string(),
        });
    }
    Ok(())
}
