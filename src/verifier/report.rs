//! Verification run records

use alloy::primitives::{Address, B256};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::types::PoolKey;

/// Record of one successful verification run, suitable for appending to the
/// JSONL report log. Only produced when predicted == observed; failed runs
/// surface as errors instead.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub pool: PoolKey,
    pub deployer: Address,
    pub salt: B256,
    pub init_code_hash: B256,
    pub predicted: Address,
    pub observed: Address,
}

impl VerificationReport {
    pub fn new(
        pool: PoolKey,
        deployer: Address,
        salt: B256,
        init_code_hash: B256,
        predicted: Address,
        observed: Address,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            pool,
            deployer,
            salt,
            init_code_hash,
            predicted,
            observed,
        }
    }
}
