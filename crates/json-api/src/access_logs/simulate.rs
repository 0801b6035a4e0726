//! Simulate Access Log Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::access_logs::data::NewAccessLog;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SimulateAccessRequest {
    /// The user whose data is accessed
    pub user_id: String,

    /// The accessing organization
    pub organization_id: String,

    /// The data type being accessed
    pub data_type: String,

    /// The stated purpose of the access
    pub purpose: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SimulateAccessResponse {
    /// Whether the log was created
    pub success: bool,

    /// Human-readable outcome
    pub message: String,

    /// Identifier of the new access log
    pub log_id: String,
}

/// Simulate Access Log Handler
///
/// Appends an always-approved demo access-log record.
#[endpoint(tags("access-logs"), summary = "Simulate Access Log")]
pub(crate) async fn handler(
    body: JsonBody<SimulateAccessRequest>,
    depot: &mut Depot,
) -> Result<Json<SimulateAccessResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = body.into_inner();

    let log = state
        .app
        .access_logs
        .simulate_access(NewAccessLog {
            user_id: request.user_id,
            organization_id: request.organization_id,
            data_type: request.data_type,
            purpose: request.purpose,
        })
        .await
        .or_500("failed to simulate access log")?;

    Ok(Json(SimulateAccessResponse {
        success: true,
        message: "Access log created".to_string(),
        log_id: log.id,
    }))
}
