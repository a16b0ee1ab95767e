//! End-to-end verification scenarios against independently computed ground
//! truth. Nothing here touches a chain: the "observed" values come from
//! alloy's own CREATE2 implementation and from the known mainnet pool.

use alloy::primitives::{Address, address, keccak256};
use std::collections::BTreeMap;

use pool_address_verifier::encoder;
use pool_address_verifier::errors::VerifierError;
use pool_address_verifier::initcode::{BytecodeTemplate, InitCodeHashSource};
use pool_address_verifier::types::{
    DeploymentContext, FACTORY_MAINNET, POOL_INIT_CODE_HASH_MAINNET, PoolKey, USDC_MAINNET,
    WETH_MAINNET,
};
use pool_address_verifier::verifier;

const TOKEN_A: Address = address!("0000000000000000000000000000000000000001");
const TOKEN_B: Address = address!("0000000000000000000000000000000000000002");

/// A pool bytecode template linking two libraries, as the size-constrained
/// deployment builds do. Layout: PUSH20 <Oracle> PUSH20 <Position> STOP.
fn pool_template() -> BytecodeTemplate {
    let mut bytecode = Vec::new();
    bytecode.push(0x73);
    bytecode.extend_from_slice(&[0u8; 20]);
    bytecode.push(0x73);
    bytecode.extend_from_slice(&[0u8; 20]);
    bytecode.push(0x00);
    BytecodeTemplate::new(
        bytecode,
        BTreeMap::from([
            ("Oracle".to_string(), vec![1usize]),
            ("Position".to_string(), vec![22usize]),
        ]),
    )
    .unwrap()
}

/// One deployment session's worth of addresses, as the orchestration layer
/// would hand them over after deploying the factory and both libraries.
fn session() -> DeploymentContext {
    DeploymentContext::new(address!("5FbDB2315678afecb367f032d93F642f64180aa3"))
        .with_library("Oracle", address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512"))
        .with_library("Position", address!("9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0"))
}

fn ground_truth(ctx: &DeploymentContext, key: &PoolKey) -> Address {
    let linked = pool_template().link(ctx.libraries()).unwrap();
    ctx.deployer().create2(encoder::salt(key), keccak256(&linked))
}

#[test]
fn dynamic_session_end_to_end() {
    let ctx = session();
    let source = InitCodeHashSource::Dynamic(pool_template());
    let key = PoolKey::new(TOKEN_A, TOKEN_B, 3000).unwrap();
    let observed = ground_truth(&ctx, &key);

    let report =
        verifier::verify_pool_address(TOKEN_A, TOKEN_B, 3000, &ctx, &source, observed).unwrap();

    assert_eq!(report.predicted, observed);
    assert_eq!(report.observed, observed);
    assert_eq!(report.init_code_hash, source.resolve(&ctx).unwrap());
}

#[test]
fn token_order_does_not_matter_end_to_end() {
    let ctx = session();
    let source = InitCodeHashSource::Dynamic(pool_template());
    let key = PoolKey::new(TOKEN_A, TOKEN_B, 3000).unwrap();
    let observed = ground_truth(&ctx, &key);

    // Same pool, tokens passed in the opposite order
    let report =
        verifier::verify_pool_address(TOKEN_B, TOKEN_A, 3000, &ctx, &source, observed).unwrap();
    assert_eq!(report.predicted, observed);
}

#[test]
fn new_session_moves_the_pool_address() {
    let source = InitCodeHashSource::Dynamic(pool_template());
    let key = PoolKey::new(TOKEN_A, TOKEN_B, 3000).unwrap();

    let first = session();
    // Same deployer redeploys its libraries at the next nonces; every library
    // address shifts and so must the derived pool address.
    let second = DeploymentContext::new(first.deployer())
        .with_library("Oracle", address!("Cf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9"))
        .with_library("Position", address!("Dc64a140Aa3E981100a9becA4E685f962f0cF6C9"));

    let addr_first = verifier::derive_pool_address(&key, &first, &source).unwrap();
    let addr_second = verifier::derive_pool_address(&key, &second, &source).unwrap();
    assert_ne!(addr_first, addr_second);
}

#[test]
fn single_library_mutation_changes_the_address() {
    let source = InitCodeHashSource::Dynamic(pool_template());
    let key = PoolKey::new(TOKEN_A, TOKEN_B, 3000).unwrap();
    let base = session();

    let mutated = DeploymentContext::new(base.deployer())
        .with_library("Oracle", base.library("Oracle").unwrap())
        .with_library("Position", address!("00000000000000000000000000000000000000aa"));

    assert_ne!(
        verifier::derive_pool_address(&key, &base, &source).unwrap(),
        verifier::derive_pool_address(&key, &mutated, &source).unwrap()
    );
}

#[test]
fn partially_deployed_session_fails_unresolved() {
    let ctx = DeploymentContext::new(address!("5FbDB2315678afecb367f032d93F642f64180aa3"))
        .with_library("Oracle", address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512"));
    let source = InitCodeHashSource::Dynamic(pool_template());

    let err = verifier::verify_pool_address(TOKEN_A, TOKEN_B, 3000, &ctx, &source, Address::ZERO)
        .unwrap_err();
    assert!(matches!(err, VerifierError::UnresolvedLibrary { library } if library == "Position"));
}

#[test]
fn static_source_verifies_known_mainnet_pool() {
    let ctx = DeploymentContext::new(FACTORY_MAINNET);
    let source = InitCodeHashSource::Static(POOL_INIT_CODE_HASH_MAINNET);

    let report = verifier::verify_pool_address(
        WETH_MAINNET,
        USDC_MAINNET,
        3000,
        &ctx,
        &source,
        address!("8ad599c3A0ff1De082011EFDDc58f1908eb6e6D8"),
    )
    .unwrap();
    assert_eq!(report.salt, encoder::salt(&report.pool));
}

#[test]
fn wrong_observed_address_is_a_hard_failure() {
    let ctx = session();
    let source = InitCodeHashSource::Dynamic(pool_template());
    let key = PoolKey::new(TOKEN_A, TOKEN_B, 3000).unwrap();
    let mut wrong = ground_truth(&ctx, &key).into_array();
    wrong[19] ^= 0x01;

    let err = verifier::verify_pool_address(
        TOKEN_A,
        TOKEN_B,
        3000,
        &ctx,
        &source,
        Address::from(wrong),
    )
    .unwrap_err();
    assert!(matches!(err, VerifierError::VerificationMismatch { .. }));
}
