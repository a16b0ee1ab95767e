//! On-chain ground truth probes
//!
//! Raw eth_call lookups against the factory and the reference probe
//! contract. These supply the observed values the verifier compares its
//! off-chain predictions against; they never compute anything themselves.

use alloy::{
    primitives::{Address, B256, Bytes, keccak256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolValue,
};
use tracing::debug;

use crate::errors::{VerifierError, VerifierResult};
use crate::types::PoolKey;

/// Asks the factory where the pool for this key lives.
/// Returns the zero address when the pool has not been created.
pub async fn get_pool_from_factory(
    provider: &dyn Provider,
    factory: Address,
    key: &PoolKey,
) -> VerifierResult<Address> {
    debug!("Querying factory {} for pool {}", factory, key);

    let mut call_data = keccak256("getPool(address,address,uint24)")[..4].to_vec();
    call_data.extend_from_slice(&(key.token0(), key.token1(), key.fee()).abi_encode());

    let tx = TransactionRequest::default().to(factory).input(call_data.into());
    let response = provider.call(&tx).await.map_err(|e| VerifierError::Contract {
        contract: factory,
        message: "getPool call failed".to_string(),
        source: e.into(),
    })?;

    Address::abi_decode(&response, true).map_err(|e| VerifierError::Contract {
        contract: factory,
        message: "failed to decode getPool response".to_string(),
        source: e.into(),
    })
}

/// Reads the probe contract's self-reported init code hash, the on-chain
/// ground truth for the resolver's output.
pub async fn get_probe_init_code_hash(
    provider: &dyn Provider,
    probe: Address,
) -> VerifierResult<B256> {
    let call_data = keccak256("POOL_INIT_CODE_HASH()")[..4].to_vec();

    let tx = TransactionRequest::default().to(probe).input(call_data.into());
    let response = provider.call(&tx).await.map_err(|e| VerifierError::Contract {
        contract: probe,
        message: "POOL_INIT_CODE_HASH call failed".to_string(),
        source: e.into(),
    })?;

    B256::abi_decode(&response, true).map_err(|e| VerifierError::Contract {
        contract: probe,
        message: "failed to decode POOL_INIT_CODE_HASH response".to_string(),
        source: e.into(),
    })
}

/// Fetches the runtime bytecode deployed at an address. Empty bytes means
/// nothing is deployed there.
pub async fn get_deployed_bytecode(
    provider: &dyn Provider,
    address: Address,
) -> VerifierResult<Bytes> {
    provider
        .get_code_at(address)
        .await
        .map_err(|e| VerifierError::Contract {
            contract: address,
            message: "eth_getCode failed".to_string(),
            source: e.into(),
        })
}
