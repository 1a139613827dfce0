use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Value of [`StatusRecord::status`] for a serving provider.
pub const STATUS_HEALTHY: &str = "healthy";

/// API version reported in every [`StatusRecord`].
pub const API_VERSION: &str = "1.0.0";

/// Path of the health-check endpoint, relative to the provider's base URL.
pub const HEALTH_PATH: &str = "/api/v1/health";

/// The three-field payload returned by the health-check endpoint.
///
/// The timestamp is kept as the literal string sent on the wire so that
/// consumers display exactly what the provider produced. Use
/// [`StatusRecord::parsed_timestamp`] when a date-time value is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl StatusRecord {
    /// Builds the healthy record for the given instant.
    ///
    /// The timestamp is rendered in UTC with whole-second precision,
    /// e.g. `2024-01-01T12:00:00Z`.
    pub fn healthy_at(at: DateTime<Utc>) -> Self {
        Self {
            status: STATUS_HEALTHY.to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            version: API_VERSION.to_string(),
        }
    }

    /// Builds the healthy record for the current wall-clock time.
    pub fn healthy_now() -> Self {
        Self::healthy_at(Utc::now())
    }

    /// Parses the timestamp as an RFC 3339 date-time.
    pub fn parsed_timestamp(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.timestamp)
    }

    /// Returns true if the record reports the healthy status.
    pub fn is_healthy(&self) -> bool {
        self.status == STATUS_HEALTHY
    }
}
