//! Status viewer: requests the provider's status record once and renders it.
//!
//! On mount the viewer issues a single request to [`HEALTH_ENDPOINT`] and
//! moves from [`ViewState::Loading`] to either [`ViewState::Success`] or
//! [`ViewState::Error`], never leaving the terminal state.

pub mod error;
pub mod fetcher;
pub mod render;
pub mod state;
pub mod viewer;

pub use error::FetchError;
pub use fetcher::{HEALTH_ENDPOINT, HttpStatusFetcher, InMemoryStatusFetcher, StatusFetcher};
pub use render::{TerminalRenderer, render_page};
pub use state::{CONNECTION_ERROR_MESSAGE, ViewState};
pub use viewer::StatusViewer;
