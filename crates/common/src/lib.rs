//! Wire model shared by the status provider and the status viewer.

pub mod status;

pub use status::{API_VERSION, HEALTH_PATH, STATUS_HEALTHY, StatusRecord};
