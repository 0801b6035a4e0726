//! Get Access Log Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::access_logs::records::AccessLogRecord;

use crate::{access_logs::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AccessLogResponse {
    /// The unique identifier of the access log
    pub id: String,

    /// The user whose data was accessed
    pub user_id: String,

    /// The accessing organization
    pub organization_id: String,

    /// Organization display name captured at log time
    pub organization_name: String,

    /// Organization icon name captured at log time
    pub organization_logo: String,

    /// The data type that was accessed
    pub data_type: String,

    /// The stated purpose of the access
    pub purpose: String,

    /// When the access happened
    pub timestamp: String,

    /// Access outcome (approved, denied, pending)
    pub status: String,

    /// Source IP address, if recorded
    pub ip_address: Option<String>,

    /// Client user agent, if recorded
    pub user_agent: Option<String>,
}

impl From<AccessLogRecord> for AccessLogResponse {
    fn from(log: AccessLogRecord) -> Self {
        AccessLogResponse {
            id: log.id,
            user_id: log.user_id,
            organization_id: log.organization_id,
            organization_name: log.organization_name,
            organization_logo: log.organization_logo,
            data_type: log.data_type,
            purpose: log.purpose,
            timestamp: log.timestamp.to_string(),
            status: log.status.as_str().to_string(),
            ip_address: log.ip_address,
            user_agent: log.user_agent,
        }
    }
}

/// Get Access Log Handler
///
/// Returns an access log.
#[endpoint(tags("access-logs"), summary = "Get Access Log")]
pub(crate) async fn handler(
    log: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<AccessLogResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let log = state
        .app
        .access_logs
        .get_access_log(&log.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(log.into()))
}
