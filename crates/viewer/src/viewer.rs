//! Mounting the viewer and observing its state.

use tokio::sync::watch;
use tracing::Instrument as _;

use crate::fetcher::StatusFetcher;
use crate::state::ViewState;

/// A mounted status viewer.
///
/// Mounting issues exactly one status request. The state starts as
/// [`ViewState::Loading`] and moves once to a terminal state when the request
/// settles. There is no retry and no polling.
#[derive(Debug, Clone)]
pub struct StatusViewer {
    state: watch::Receiver<ViewState>,
}

impl StatusViewer {
    /// Mounts the viewer and spawns its single status request.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<F: StatusFetcher>(fetcher: F) -> Self {
        let (tx, rx) = watch::channel(ViewState::Loading);

        let span = tracing::info_span!("status_viewer");
        tokio::spawn(
            async move {
                let next = ViewState::from_outcome(fetcher.fetch_status().await);
                tracing::info!(success = matches!(next, ViewState::Success(_)), "status settled");

                tx.send_replace(next);
            }
            .instrument(span),
        );

        Self { state: rx }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Waits for the terminal state and returns it.
    ///
    /// If the request task dies before settling, the viewer reports the
    /// connection error.
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.state.clone();
        let settled = rx
            .wait_for(ViewState::is_terminal)
            .await
            .map(|state| state.clone());

        settled.unwrap_or_else(|_| ViewState::connection_error())
    }
}
