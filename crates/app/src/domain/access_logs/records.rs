//! Access Log Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::query::Timestamped;

/// Outcome of a recorded data access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessStatus {
    Approved,
    Denied,
    Pending,
}

impl AccessStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Denied => "denied",
            Self::Pending => "pending",
        }
    }
}

impl Display for AccessStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Access Log Record
///
/// Append-only. Organization name and logo are denormalized at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessLogRecord {
    pub id: String,
    pub user_id: String,
    pub organization_id: String,
    pub organization_name: String,
    pub organization_logo: String,
    pub data_type: String,
    pub purpose: String,
    pub timestamp: Timestamp,
    pub status: AccessStatus,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl Timestamped for AccessLogRecord {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
