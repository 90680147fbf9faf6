//! Process lifecycle tracking.
//!
//! The server moves through three states:
//!
//! ```text
//! Running --(shutdown signal)--> Closing --(transport closed)--> Terminated
//! Running --(client disconnected)-------------------------------> Terminated
//! ```
//!
//! Transitions only move forward.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use super::{TransportError, TransportResult};

/// Lifecycle state of the server process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifecycleState {
    /// Serving requests.
    Running,
    /// Shutdown requested; the transport is being closed.
    Closing,
    /// The transport is closed.
    Terminated,
}

/// Shared handle on the server lifecycle.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: Arc<watch::Sender<LifecycleState>>,
}

impl Lifecycle {
    /// Create a lifecycle in the `Running` state.
    pub fn new() -> Self {
        let (state, _) = watch::channel(LifecycleState::Running);
        Self {
            state: Arc::new(state),
        }
    }

    /// Current state.
    pub fn state(&self) -> LifecycleState {
        *self.state.borrow()
    }

    /// Move from `Running` to `Closing`.
    ///
    /// Returns `false` if shutdown had already begun.
    pub fn begin_closing(&self) -> bool {
        self.advance(LifecycleState::Closing)
    }

    /// Move to `Terminated`.
    pub fn terminate(&self) -> bool {
        self.advance(LifecycleState::Terminated)
    }

    /// Wait until shutdown has been requested.
    pub async fn closing(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|state| *state >= LifecycleState::Closing).await;
    }

    fn advance(&self, next: LifecycleState) -> bool {
        let advanced = self.state.send_if_modified(|state| {
            if *state < next {
                *state = next;
                true
            } else {
                false
            }
        });
        if advanced {
            info!("Lifecycle -> {:?}", next);
        }
        advanced
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for an interrupt (Ctrl+C), or SIGTERM on unix.
pub async fn shutdown_signal() -> TransportResult<()> {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut terminate =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .map_err(TransportError::SignalError)?;

        tokio::select! {
            res = ctrl_c => res.map_err(TransportError::SignalError)?,
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await.map_err(TransportError::SignalError)?;

    Ok(())
}
