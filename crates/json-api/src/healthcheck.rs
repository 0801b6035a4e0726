//! TrustBase JSON API Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,

    /// Seeded user count
    pub users: usize,

    /// Seeded organization count
    pub organizations: usize,

    /// Consent record count
    pub consents: usize,

    /// Access-log record count
    pub access_logs: usize,
}

/// Healthcheck handler
///
/// Returns service health status and per-collection record counts.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let counts = state.app.store.counts().await;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        users: counts.users,
        organizations: counts.organizations,
        consents: counts.consents,
        access_logs: counts.access_logs,
    }))
}
