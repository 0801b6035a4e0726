//! Consent Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::query::Timestamped;

/// Consent lifecycle status.
///
/// `Expired` is never written by the core; it can only arrive through seed
/// data. The stats summary derives an expired count by subtraction instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    Active,
    Revoked,
    Expired,
}

impl ConsentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Revoked => "revoked",
            Self::Expired => "expired",
        }
    }
}

impl Display for ConsentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Action recorded in the consent history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentAction {
    Granted,
    Revoked,
    Updated,
    Accessed,
}

impl ConsentAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Revoked => "revoked",
            Self::Updated => "updated",
            Self::Accessed => "accessed",
        }
    }
}

impl Display for ConsentAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Consent Record
///
/// The organization name is copied at creation time and is not kept in sync
/// with later organization edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub id: String,
    pub user_id: String,
    pub organization_id: String,
    pub organization_name: String,
    pub data_types: Vec<String>,
    pub purpose: String,
    pub status: ConsentStatus,
    pub granted_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
}

impl Timestamped for ConsentRecord {
    fn timestamp(&self) -> Timestamp {
        self.granted_at
    }
}

/// Consent History Record
///
/// Append-only; one entry per grant or revoke event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentHistoryRecord {
    pub id: String,
    pub consent_id: String,
    pub action: ConsentAction,
    pub timestamp: Timestamp,
    pub data_types: Option<Vec<String>>,
    pub reason: Option<String>,
}

impl Timestamped for ConsentHistoryRecord {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
