//! Consent History Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::consents::records::ConsentHistoryRecord;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConsentHistoryEntryResponse {
    /// The unique identifier of the history entry
    pub id: String,

    /// The consent the entry belongs to
    pub consent_id: String,

    /// Action taken (granted, revoked, updated, accessed)
    pub action: String,

    /// When the action happened
    pub timestamp: String,

    /// Data types in effect at the time, if recorded
    pub data_types: Option<Vec<String>>,

    /// Reason recorded with the action, if any
    pub reason: Option<String>,
}

impl From<ConsentHistoryRecord> for ConsentHistoryEntryResponse {
    fn from(entry: ConsentHistoryRecord) -> Self {
        ConsentHistoryEntryResponse {
            id: entry.id,
            consent_id: entry.consent_id,
            action: entry.action.as_str().to_string(),
            timestamp: entry.timestamp.to_string(),
            data_types: entry.data_types,
            reason: entry.reason,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConsentHistoryResponse {
    /// History entries, newest first
    pub history: Vec<ConsentHistoryEntryResponse>,

    /// Number of entries returned
    pub total: usize,
}

/// Consent History Handler
///
/// Returns the history entries for one consent.
#[endpoint(tags("consents"), summary = "Consent History")]
pub(crate) async fn handler(
    consent: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ConsentHistoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let history = state
        .app
        .consents
        .consent_history(&consent.into_inner())
        .await
        .or_500("failed to fetch consent history")?;

    let history: Vec<ConsentHistoryEntryResponse> = history.into_iter().map(Into::into).collect();

    Ok(Json(ConsentHistoryResponse {
        total: history.len(),
        history,
    }))
}
