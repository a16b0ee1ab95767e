//! Pool Address Verifier - Main Entry Point
//!
//! Predicts the CREATE2 address of the configured pool off-chain, then checks
//! it against the factory's answer on-chain

use pool_address_verifier::*;
use anyhow::Result;
use alloy::primitives::Address;
use tracing::{info, warn, error};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🔍 Pool Address Verifier v0.3.0");
    info!("📋 Configuration:");
    info!("   Network: {}", config.network);
    info!("   Factory: {}", config.factory_address);
    info!("   Token A: {}", config.token_a);
    info!("   Token B: {}", config.token_b);
    info!("   Fee Tier: {}", config.fee);

    if !types::FEE_TIERS.contains(&config.fee) {
        warn!("   ⚠️  Fee tier {} is not a genesis tier; the factory may reject it", config.fee);
    }

    // Build the session context and hash source
    let source = config.init_code_hash_source()?;
    let context = DeploymentContext::new(config.factory_address)
        .with_libraries(config.libraries.clone());

    match &source {
        initcode::InitCodeHashSource::Static(hash) => {
            info!("   Init Code Hash: {} (static)", hash);
        }
        initcode::InitCodeHashSource::Dynamic(template) => {
            info!(
                "   Init Code Hash: dynamic, linking [{}]",
                template.libraries().collect::<Vec<_>>().join(", ")
            );
        }
    }

    // Setup network provider
    let provider = network::setup_provider(&config).await?;

    // Cross-check the resolved hash against the on-chain probe if one is
    // configured
    if let Some(probe) = config.probe_address {
        let observed_hash = network::get_probe_init_code_hash(provider.as_ref(), probe).await?;
        let resolved_hash = source.resolve(&context)?;
        verifier::verify_init_code_hash(resolved_hash, observed_hash)?;
        info!("✅ Init code hash matches probe contract at {}", probe);
    }

    // Ask the factory where the pool actually lives
    let key = PoolKey::new(config.token_a, config.token_b, config.fee)?;
    let observed =
        network::get_pool_from_factory(provider.as_ref(), config.factory_address, &key).await?;

    if observed == Address::ZERO {
        error!("❌ Factory reports no pool for {}", key);
        return Err(anyhow::anyhow!("Pool not deployed for {}", key));
    }

    // Derive off-chain and compare
    let report = verifier::verify_pool_address(
        config.token_a,
        config.token_b,
        config.fee,
        &context,
        &source,
        observed,
    )?;

    info!("✅ Verified pool {} at {}", report.pool, report.predicted);
    storage::save_report(&report)?;

    Ok(())
}
