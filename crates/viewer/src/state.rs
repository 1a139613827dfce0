//! View state of the status viewer.

use common::StatusRecord;

use crate::error::FetchError;

/// Message shown when the status could not be obtained.
pub const CONNECTION_ERROR_MESSAGE: &str = "Failed to connect to API";

/// What the viewer currently displays.
///
/// `Loading` is the start state; `Success` and `Error` are terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Success(StatusRecord),
    Error(String),
}

impl ViewState {
    /// Maps the outcome of the status request to a terminal state.
    ///
    /// Every failure becomes [`CONNECTION_ERROR_MESSAGE`]; the cause is logged
    /// and otherwise dropped.
    pub fn from_outcome(outcome: Result<StatusRecord, FetchError>) -> Self {
        match outcome {
            Ok(record) => Self::Success(record),
            Err(err) => {
                tracing::warn!(error = %err, "status request failed");
                Self::connection_error()
            }
        }
    }

    /// The error state with the fixed user-facing message.
    pub fn connection_error() -> Self {
        Self::Error(CONNECTION_ERROR_MESSAGE.to_string())
    }

    /// Returns true once the state can no longer change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}
