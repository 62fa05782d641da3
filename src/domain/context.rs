//! Consumer context.
//!
//! Downstream code reads the resolved networks from a task-local receiver
//! installed with [`NetworksContext::scope`]. Reading outside a scope is a
//! wiring mistake and panics.

use std::future::Future;

use tokio::sync::watch;

use crate::models::{ConnectionPairing, ResolutionStatus, StatusKind};

tokio::task_local! {
    static NETWORKS: watch::Receiver<ResolutionStatus>;
}

const MISSING_SCOPE: &str =
    "NetworksContext accessed outside of NetworksContext::scope; wrap the consumer in a scope \
     created from NetworkResolutionService::subscribe";

pub struct NetworksContext;

impl NetworksContext {
    /// Runs `f` with `receiver` available to [`NetworksContext::current`].
    pub async fn scope<F>(receiver: watch::Receiver<ResolutionStatus>, f: F) -> F::Output
    where
        F: Future,
    {
        NETWORKS.scope(receiver, f).await
    }

    pub fn sync_scope<F, T>(receiver: watch::Receiver<ResolutionStatus>, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        NETWORKS.sync_scope(receiver, f)
    }

    /// Snapshot of the current status.
    ///
    /// # Panics
    /// Outside of a scope.
    pub fn current() -> ResolutionStatus {
        NETWORKS
            .try_with(|receiver| receiver.borrow().clone())
            .unwrap_or_else(|_| panic!("{}", MISSING_SCOPE))
    }

    /// Runs `f` on the current status without cloning it.
    ///
    /// # Panics
    /// Outside of a scope.
    pub fn with<F, T>(f: F) -> T
    where
        F: FnOnce(&ResolutionStatus) -> T,
    {
        NETWORKS
            .try_with(|receiver| f(&receiver.borrow()))
            .unwrap_or_else(|_| panic!("{}", MISSING_SCOPE))
    }

    /// A receiver of its own, for waiting on status changes.
    ///
    /// # Panics
    /// Outside of a scope.
    pub fn receiver() -> watch::Receiver<ResolutionStatus> {
        NETWORKS
            .try_with(|receiver| receiver.clone())
            .unwrap_or_else(|_| panic!("{}", MISSING_SCOPE))
    }

    pub fn is_available() -> bool {
        NETWORKS.try_with(|_| ()).is_ok()
    }
}

/// Gates on the status: `on_connected` only ever sees a complete pairing, every
/// other status goes to `on_pending`.
pub fn render<T>(
    status: &ResolutionStatus,
    on_pending: impl FnOnce(StatusKind) -> T,
    on_connected: impl FnOnce(&ConnectionPairing) -> T,
) -> T {
    match status {
        ResolutionStatus::Connected(pairing) => on_connected(pairing),
        other => on_pending(other.kind()),
    }
}
