//! Consent Stats Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::consents::data::ConsentStats;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConsentStatsResponse {
    /// Total consents the user has ever granted
    pub total: usize,

    /// Currently active consents
    pub active: usize,

    /// Revoked consents
    pub revoked: usize,

    /// Consents that are neither active nor revoked
    pub expired: usize,

    /// Distinct organizations the user has consents with
    pub organizations: usize,
}

impl From<ConsentStats> for ConsentStatsResponse {
    fn from(stats: ConsentStats) -> Self {
        ConsentStatsResponse {
            total: stats.total,
            active: stats.active,
            revoked: stats.revoked,
            expired: stats.expired,
            organizations: stats.organizations,
        }
    }
}

/// Consent Stats Handler
///
/// Returns consent statistics for a user.
#[endpoint(tags("consents"), summary = "Consent Stats")]
pub(crate) async fn handler(
    user_id: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<ConsentStatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stats = state
        .app
        .consents
        .consent_stats(&user_id.into_inner())
        .await
        .or_500("failed to compute consent stats")?;

    Ok(Json(stats.into()))
}
