//! Access Log Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::access_logs::data::{
    AccessLogFilter, DEFAULT_LIMIT, DEFAULT_WINDOW_DAYS,
};

use crate::{access_logs::get::AccessLogResponse, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AccessLogsResponse {
    /// The list of access logs, newest first
    pub access_logs: Vec<AccessLogResponse>,

    /// Number of logs returned
    pub total: usize,
}

/// Access Log Index Handler
///
/// Returns the user's access logs, windowed and limited.
#[endpoint(tags("access-logs"), summary = "List Access Logs")]
pub(crate) async fn handler(
    user_id: QueryParam<String, true>,
    organization_id: QueryParam<String, false>,
    status: QueryParam<String, false>,
    data_type: QueryParam<String, false>,
    days: QueryParam<i64, false>,
    limit: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<AccessLogsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = AccessLogFilter {
        user_id: user_id.into_inner(),
        organization_id: organization_id.into_inner(),
        status: status.into_inner(),
        data_type: data_type.into_inner(),
        days: days.into_inner().unwrap_or(DEFAULT_WINDOW_DAYS),
        limit: limit.into_inner().unwrap_or(DEFAULT_LIMIT),
    };

    let logs = state
        .app
        .access_logs
        .list_access_logs(filter)
        .await
        .or_500("failed to fetch access logs")?;

    let access_logs: Vec<AccessLogResponse> = logs.into_iter().map(Into::into).collect();

    Ok(Json(AccessLogsResponse {
        total: access_logs.len(),
        access_logs,
    }))
}
