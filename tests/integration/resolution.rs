//! End-to-end resolution: custom networks file -> registry -> resolver ->
//! materializer -> published status -> consumer context.
use std::{collections::HashMap, io::Write, sync::Arc, time::Duration};

use alloy::primitives::{address, Address, Bytes};
use async_trait::async_trait;
use rollup_network_resolver::{
    config::load_custom_networks,
    domain::{
        render, ChainResolver, ConnectionMaterializer, NetworkResolutionService, NetworksContext,
        ResolutionOutcome,
    },
    models::{Orientation, StatusKind},
    repositories::InMemoryNetworkRegistry,
    services::{
        ConnectOptions, EvmProviderTrait, LocalSigner, LocalWalletConnector, ProviderError,
        ProviderFactory, Signer, WalletConnection, WalletState,
    },
};
use tempfile::NamedTempFile;
use tokio::sync::{mpsc, Notify};

const ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const BASE_RPC: &str = "http://127.0.0.1:8545";
const ROLLUP_RPC: &str = "http://127.0.0.1:8547";

struct FixedChainProvider {
    rpc_url: String,
    chain_id: u64,
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl EvmProviderTrait for FixedChainProvider {
    fn rpc_url(&self) -> String {
        self.rpc_url.clone()
    }

    async fn get_chain_id(&self) -> Result<u64, ProviderError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        Ok(self.chain_id)
    }

    async fn health_check(&self) -> Result<bool, ProviderError> {
        Ok(true)
    }

    async fn sign_message(
        &self,
        _address: Address,
        _message: &[u8],
    ) -> Result<Bytes, ProviderError> {
        Ok(Bytes::from(vec![1u8; 65]))
    }
}

struct FixedChainFactory {
    chains: HashMap<&'static str, u64>,
}

impl ProviderFactory for FixedChainFactory {
    fn create_provider(&self, rpc_url: &str) -> Result<Arc<dyn EvmProviderTrait>, ProviderError> {
        let chain_id = self
            .chains
            .get(rpc_url)
            .copied()
            .ok_or_else(|| ProviderError::RpcError(format!("connection refused: {}", rpc_url)))?;
        Ok(Arc::new(FixedChainProvider {
            rpc_url: rpc_url.to_string(),
            chain_id,
            gate: None,
        }))
    }
}

struct TestWallet {
    provider: Arc<dyn EvmProviderTrait>,
    signer: Arc<dyn Signer>,
}

impl WalletConnection for TestWallet {
    fn provider(&self) -> Arc<dyn EvmProviderTrait> {
        self.provider.clone()
    }

    fn signer(&self) -> Arc<dyn Signer> {
        self.signer.clone()
    }
}

fn wallet_on(chain_id: u64, gate: Option<Arc<Notify>>) -> Arc<dyn WalletConnection> {
    Arc::new(TestWallet {
        provider: Arc::new(FixedChainProvider {
            rpc_url: BASE_RPC.to_string(),
            chain_id,
            gate,
        }),
        signer: Arc::new(LocalSigner::from_hex(PRIVATE_KEY).unwrap()),
    })
}

fn state_on(chain_id: u64) -> WalletState {
    WalletState::connected(wallet_on(chain_id, None), ACCOUNT, chain_id)
}

fn write_networks_file() -> NamedTempFile {
    let zero = "0x0000000000000000000000000000000000000000";
    let networks = serde_json::json!({
        "networks": [{
            "base": {
                "chain_id": 1337,
                "name": "Local Base",
                "rpc_url": BASE_RPC,
                "explorer_url": "",
                "block_time_secs": 1
            },
            "rollup": {
                "chain_id": 412346,
                "name": "Local Rollup",
                "rpc_url": ROLLUP_RPC,
                "explorer_url": "",
                "partner_chain_id": 1337,
                "eth_bridge": {
                    "bridge": "0x2b360a9881f21c3d7aa0ea6ca0de2a3341d4ef3c",
                    "inbox": "0xff4a24b22f94979e9ba5f3eb35838aa814bad6f1",
                    "outbox": "0x49940929c7cA9b50Ff57a01d3a92817A414E6B9B",
                    "rollup": "0x65a59d67da8e710ef9a01eca37f83f84aedec416",
                    "sequencer_inbox": "0xe7362d0787b51d8c72d504803e5b1d6dcda89540"
                },
                "token_bridge": {
                    "l1_custom_gateway": zero,
                    "l1_erc20_gateway": zero,
                    "l1_gateway_router": zero,
                    "l1_multicall": zero,
                    "l1_proxy_admin": zero,
                    "l1_weth": zero,
                    "l1_weth_gateway": zero,
                    "l2_custom_gateway": zero,
                    "l2_erc20_gateway": zero,
                    "l2_gateway_router": zero,
                    "l2_multicall": zero,
                    "l2_proxy_admin": zero,
                    "l2_weth": zero,
                    "l2_weth_gateway": zero
                },
                "confirm_period_blocks": 20,
                "retryable_lifetime_seconds": 604800
            }
        }]
    });

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", networks).unwrap();
    file
}

fn build_service(
    requested_rollup_chain_id: Option<u64>,
) -> NetworkResolutionService<InMemoryNetworkRegistry, FixedChainFactory> {
    let file = write_networks_file();
    let custom_networks = load_custom_networks(file.path()).unwrap();

    let resolver = ChainResolver::new(Arc::new(InMemoryNetworkRegistry::new()))
        .with_custom_networks(custom_networks.networks);
    let factory = FixedChainFactory {
        chains: HashMap::from([(BASE_RPC, 1337), (ROLLUP_RPC, 412346)]),
    };
    let materializer = ConnectionMaterializer::new(Arc::new(factory), true);

    NetworkResolutionService::new(resolver, materializer, requested_rollup_chain_id)
}

#[tokio::test]
async fn test_wallet_on_local_base_connects() {
    let service = build_service(Some(412346));

    service.handle_wallet_state(state_on(1337)).await;

    let status = service.current();
    let pairing = status.pairing().expect("expected a connected pairing");
    assert_eq!(pairing.orientation(), Orientation::WalletOnBase);
    assert_eq!(pairing.l1.network.chain_id, 1337);
    assert_eq!(pairing.l2.network.chain_id, 412346);
    assert_eq!(pairing.l2.provider.rpc_url(), ROLLUP_RPC);
    assert!(pairing.l2.network.is_custom);
    assert_eq!(pairing.l2.signer.address().await.unwrap(), ACCOUNT);
}

#[tokio::test]
async fn test_wallet_on_local_rollup_connects() {
    let service = build_service(None);

    service.handle_wallet_state(state_on(412346)).await;

    let status = service.current();
    let pairing = status.pairing().expect("expected a connected pairing");
    assert!(pairing.is_connected_to_rollup);
    assert_eq!(pairing.l1.provider.rpc_url(), BASE_RPC);
}

#[tokio::test]
async fn test_unmapped_chain_is_not_supported() {
    let service = build_service(None);

    service.handle_wallet_state(state_on(999999)).await;

    assert_eq!(service.current().kind(), StatusKind::NotSupported);
}

#[tokio::test]
async fn test_wallet_on_other_rollup_is_not_supported() {
    let service = build_service(Some(777));

    service.handle_wallet_state(state_on(412346)).await;

    assert_eq!(service.current().kind(), StatusKind::NotSupported);
}

#[tokio::test]
async fn test_unreachable_counterpart_is_not_supported() {
    let resolver = ChainResolver::new(Arc::new(InMemoryNetworkRegistry::new()))
        .with_custom_networks(load_custom_networks(write_networks_file().path()).unwrap().networks);
    // Only the base endpoint answers.
    let factory = FixedChainFactory {
        chains: HashMap::from([(BASE_RPC, 1337)]),
    };
    let service = NetworkResolutionService::new(
        resolver,
        ConnectionMaterializer::new(Arc::new(factory), true),
        None,
    );

    service.handle_wallet_state(state_on(1337)).await;

    assert_eq!(service.current().kind(), StatusKind::NotSupported);
}

#[tokio::test]
async fn test_declined_connection_is_not_connected() {
    let service = build_service(None);
    let connector =
        LocalWalletConnector::new(BASE_RPC.to_string(), None, Duration::from_secs(1));

    service
        .connect(&connector, &ConnectOptions::default())
        .await;

    assert_eq!(service.current().kind(), StatusKind::NotConnected);
}

#[tokio::test]
async fn test_account_removal_disconnects() {
    let service = build_service(None);
    let connected = state_on(1337);

    service.handle_wallet_state(connected.clone()).await;
    assert!(service.current().is_connected());

    service
        .handle_wallet_state(WalletState {
            account: None,
            ..connected
        })
        .await;

    assert_eq!(service.current().kind(), StatusKind::NotConnected);
}

#[tokio::test]
async fn test_slow_resolution_does_not_overwrite_newer_one() {
    let service = build_service(None);
    let gate = Arc::new(Notify::new());
    let slow = WalletState::connected(wallet_on(1337, Some(gate.clone())), ACCOUNT, 1337);

    let (slow_outcome, _) = tokio::join!(service.handle_wallet_state(slow), async {
        let outcome = service.handle_wallet_state(state_on(412346)).await;
        gate.notify_one();
        outcome
    });

    assert!(matches!(slow_outcome, ResolutionOutcome::Superseded));
    let status = service.current();
    assert_eq!(
        status.pairing().map(|p| p.orientation()),
        Some(Orientation::WalletOnRollup)
    );
}

#[tokio::test]
async fn test_consumer_reads_status_through_context() {
    let service = Arc::new(build_service(None));
    let (sender, events) = mpsc::channel(4);
    let worker = tokio::spawn(Arc::clone(&service).run(events));

    let line = NetworksContext::scope(service.subscribe(), async move {
        assert_eq!(NetworksContext::current().kind(), StatusKind::Loading);

        sender.send(state_on(1337)).await.unwrap();
        let mut receiver = NetworksContext::receiver();
        tokio::time::timeout(
            Duration::from_secs(5),
            receiver.wait_for(|status| status.is_connected()),
        )
        .await
        .unwrap()
        .unwrap();

        render(
            &NetworksContext::current(),
            |kind| kind.to_string(),
            |pairing| pairing.summary(),
        )
    })
    .await;

    assert_eq!(line, "Local Base (1337) <-> Local Rollup (412346), wallet_on_base");
    worker.await.unwrap();
}
