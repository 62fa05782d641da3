//! Resolution state machine.
//!
//! Every wallet change starts a new resolution and takes the next sequence
//! number. Only the resolution holding the latest number may publish, so a slow
//! resolution finishing after a newer one started is dropped instead of
//! overwriting fresher state.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use alloy::primitives::Address;
use log::{debug, info, warn};
use tokio::sync::{mpsc, watch, Mutex};

use crate::{
    models::{ConnectionPairing, ResolutionError, ResolutionStatus},
    repositories::NetworkRegistry,
    services::{ConnectOptions, ProviderFactory, WalletConnection, WalletConnector, WalletState},
};

use super::{ChainResolver, ConnectionMaterializer};

/// What happened to a single wallet state change.
#[derive(Debug, Clone)]
pub enum ResolutionOutcome {
    /// The status was published to subscribers.
    Published(ResolutionStatus),
    /// A newer wallet state arrived while this one was resolving.
    Superseded,
    /// Same connection, account and chain as the last state seen.
    Unchanged,
}

impl ResolutionOutcome {
    pub fn status(&self) -> Option<&ResolutionStatus> {
        match self {
            Self::Published(status) => Some(status),
            _ => None,
        }
    }
}

pub struct NetworkResolutionService<R, P>
where
    R: NetworkRegistry,
    P: ProviderFactory,
{
    resolver: ChainResolver<R>,
    materializer: ConnectionMaterializer<P>,
    requested_rollup_chain_id: Option<u64>,
    sequence: AtomicU64,
    last_state: Mutex<Option<WalletState>>,
    status_sender: watch::Sender<ResolutionStatus>,
}

impl<R, P> NetworkResolutionService<R, P>
where
    R: NetworkRegistry + 'static,
    P: ProviderFactory + 'static,
{
    pub fn new(
        resolver: ChainResolver<R>,
        materializer: ConnectionMaterializer<P>,
        requested_rollup_chain_id: Option<u64>,
    ) -> Self {
        let (status_sender, _) = watch::channel(ResolutionStatus::Loading);
        Self {
            resolver,
            materializer,
            requested_rollup_chain_id,
            sequence: AtomicU64::new(0),
            last_state: Mutex::new(None),
            status_sender,
        }
    }

    /// Receiver for the consumer context. Starts at the current status.
    pub fn subscribe(&self) -> watch::Receiver<ResolutionStatus> {
        self.status_sender.subscribe()
    }

    pub fn current(&self) -> ResolutionStatus {
        self.status_sender.borrow().clone()
    }

    /// Resolves `state` to completion and publishes the result if still current.
    pub async fn handle_wallet_state(&self, state: WalletState) -> ResolutionOutcome {
        match self.begin(&state).await {
            Some(ticket) => self.complete(ticket, state).await,
            None => ResolutionOutcome::Unchanged,
        }
    }

    /// Requests a wallet connection. A declined or failed connection leaves the
    /// status at `NotConnected`.
    pub async fn connect(
        &self,
        connector: &dyn WalletConnector,
        options: &ConnectOptions,
    ) -> ResolutionOutcome {
        match connector.connect(options).await {
            Ok(state) => self.handle_wallet_state(state).await,
            Err(e) => {
                warn!("Wallet connection failed: {}", e);
                let state = WalletState::disconnected();
                match self.begin(&state).await {
                    Some(ticket) => self.publish(ticket, ResolutionStatus::NotConnected),
                    None => ResolutionOutcome::Unchanged,
                }
            }
        }
    }

    /// Consumes wallet state changes until the sender side is dropped.
    ///
    /// Sequence numbers are taken in arrival order, then each resolution runs on
    /// its own task so a slow chain never blocks a newer state.
    pub async fn run(self: Arc<Self>, mut events: mpsc::Receiver<WalletState>) {
        while let Some(state) = events.recv().await {
            let Some(ticket) = self.begin(&state).await else {
                continue;
            };
            let service = Arc::clone(&self);
            tokio::spawn(async move {
                service.complete(ticket, state).await;
            });
        }
        debug!("Wallet event stream closed");
    }

    /// Dedupes `state` and takes the next sequence number for it.
    async fn begin(&self, state: &WalletState) -> Option<u64> {
        let mut last_state = self.last_state.lock().await;
        if let Some(previous) = last_state.as_ref() {
            if previous.same_as(state) {
                debug!("Wallet state unchanged, skipping resolution");
                return None;
            }
        }
        *last_state = Some(state.clone());
        Some(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn complete(&self, ticket: u64, state: WalletState) -> ResolutionOutcome {
        let (connection, account) = match (state.connection, state.account) {
            (Some(connection), Some(account)) => (connection, account),
            _ => {
                info!("No wallet account available");
                return self.publish(ticket, ResolutionStatus::NotConnected);
            }
        };

        self.publish(ticket, ResolutionStatus::Loading);

        let status = match self.resolve_pairing(connection.as_ref(), account).await {
            Ok(pairing) => {
                info!("Resolved networks: {}", pairing.summary());
                ResolutionStatus::Connected(Arc::new(pairing))
            }
            Err(e) => {
                warn!("Network resolution failed: {}", e);
                ResolutionStatus::NotSupported
            }
        };

        self.publish(ticket, status)
    }

    async fn resolve_pairing(
        &self,
        wallet: &dyn WalletConnection,
        account: Address,
    ) -> Result<ConnectionPairing, ResolutionError> {
        let resolved = self
            .resolver
            .resolve(wallet, self.requested_rollup_chain_id)
            .await?;
        debug!(
            "Wallet chain {} resolved as {}",
            resolved.wallet_chain_id, resolved.orientation
        );
        self.materializer
            .materialize(resolved, wallet, account)
            .await
    }

    /// Publishes `status` if `ticket` is still the latest sequence number.
    fn publish(&self, ticket: u64, status: ResolutionStatus) -> ResolutionOutcome {
        // The sequence check runs under the channel's write lock, so a newer
        // resolution can never be overwritten by this one.
        let published = self.status_sender.send_if_modified(|current| {
            if self.sequence.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *current = status.clone();
            true
        });

        if published {
            debug!("Resolution #{} published {}", ticket, status.kind());
            ResolutionOutcome::Published(status)
        } else {
            debug!("Discarding stale resolution #{}", ticket);
            ResolutionOutcome::Superseded
        }
    }
}
