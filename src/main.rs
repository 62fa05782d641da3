//! # Rollup Network Resolver
//!
//! Connects a local key wallet, resolves which side of a base/rollup bridge it
//! is attached to and logs the resulting pairing.
//!
//! ## Usage
//!
//! ```bash
//! WALLET_RPC_URL=http://localhost:8545 WALLET_PRIVATE_KEY=0x... cargo run
//! ```

use std::sync::Arc;

use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use rollup_network_resolver::{
    config::{load_custom_networks_if_present, ResolverConfig},
    domain::{
        render, ChainResolver, ConnectionMaterializer, NetworkResolutionService, NetworksContext,
    },
    logging::setup_logging,
    models::ConnectionPairing,
    repositories::InMemoryNetworkRegistry,
    services::{ConnectOptions, HttpProviderFactory, LocalWalletConnector},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error reporting with eyre
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging().wrap_err("Failed to initialize logging")?;

    let config = ResolverConfig::from_env();
    info!("Resolver configuration: {:?}", config);

    let custom_networks = load_custom_networks_if_present(&config.custom_networks_file_path)
        .wrap_err("Failed to load custom networks file")?;
    info!(
        "Loaded {} custom network pair(s)",
        custom_networks.networks.len()
    );

    let registry = Arc::new(InMemoryNetworkRegistry::new());
    let resolver = ChainResolver::new(registry).with_custom_networks(custom_networks.networks);
    let materializer = ConnectionMaterializer::new(
        Arc::new(HttpProviderFactory::from_timeout_ms(config.rpc_timeout_ms)),
        config.verify_rpc_chain_id,
    );
    let service =
        NetworkResolutionService::new(resolver, materializer, config.requested_rollup_chain_id);

    let connector = LocalWalletConnector::new(
        config.wallet_rpc_url.clone(),
        config.wallet_private_key.clone(),
        config.rpc_timeout(),
    );
    let options = ConnectOptions {
        preferred_chain_id: config.requested_rollup_chain_id,
    };
    service.connect(&connector, &options).await;

    NetworksContext::scope(service.subscribe(), report()).await;
    Ok(())
}

async fn report() {
    let status = NetworksContext::current();
    render(
        &status,
        |kind| info!("Networks unavailable: {}", kind),
        log_pairing,
    );
}

fn log_pairing(pairing: &ConnectionPairing) {
    info!("Connected: {}", pairing.summary());
    info!(
        "Base {} via {} (explorer: {})",
        pairing.l1.network.name,
        pairing.l1.provider.rpc_url(),
        pairing.l1.network.explorer_url
    );
    info!(
        "Rollup {} via {}, inbox {}, gateway router {}",
        pairing.l2.network.name,
        pairing.l2.provider.rpc_url(),
        pairing.l2.network.eth_bridge.inbox,
        pairing.l2.network.token_bridge.l1_gateway_router
    );
}
