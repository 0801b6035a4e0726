//! In-memory record store.
//!
//! One lock per collection: list and aggregation reads may run concurrently,
//! while appends and in-place updates (consent revoke, access-log append,
//! session issue/revoke) are serialized so a reader never observes a
//! partially-updated record.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::{
    domain::{
        access_logs::records::AccessLogRecord,
        auth::records::UserRecord,
        consents::records::{ConsentHistoryRecord, ConsentRecord},
        organizations::records::OrganizationRecord,
    },
    seed::SeedData,
};

/// All record collections plus the session map.
///
/// Constructed once from injected seed data and shared between services;
/// the store never reloads its own contents.
#[derive(Debug, Default)]
pub struct Store {
    pub organizations: RwLock<Vec<OrganizationRecord>>,
    pub consents: RwLock<Vec<ConsentRecord>>,
    pub consent_history: RwLock<Vec<ConsentHistoryRecord>>,
    pub access_logs: RwLock<Vec<AccessLogRecord>>,
    pub users: RwLock<Vec<UserRecord>>,
    /// Session token -> user id.
    pub sessions: RwLock<FxHashMap<String, String>>,
}

/// Per-collection record counts, reported by the healthcheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub users: usize,
    pub organizations: usize,
    pub consents: usize,
    pub access_logs: usize,
}

impl Store {
    #[must_use]
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            organizations: RwLock::new(seed.organizations),
            consents: RwLock::new(seed.consents),
            consent_history: RwLock::new(seed.consent_history),
            access_logs: RwLock::new(seed.access_logs),
            users: RwLock::new(seed.users),
            sessions: RwLock::new(seed.tokens),
        }
    }

    pub async fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.read().await.len(),
            organizations: self.organizations.read().await.len(),
            consents: self.consents.read().await.len(),
            access_logs: self.access_logs.read().await.len(),
        }
    }
}
