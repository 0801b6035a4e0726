//! Access Log Stats Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::{
    aggregate::GroupCount,
    domain::access_logs::data::{AccessLogStats, DEFAULT_WINDOW_DAYS},
};

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrganizationCountResponse {
    /// Organization display name
    pub name: String,

    /// Access count for the organization
    pub count: u64,
}

impl From<GroupCount> for OrganizationCountResponse {
    fn from(group: GroupCount) -> Self {
        OrganizationCountResponse {
            name: group.label,
            count: group.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DataTypeCountResponse {
    /// Data type label
    #[serde(rename = "type")]
    pub data_type: String,

    /// Access count for the data type
    pub count: u64,
}

impl From<GroupCount> for DataTypeCountResponse {
    fn from(group: GroupCount) -> Self {
        DataTypeCountResponse {
            data_type: group.label,
            count: group.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AccessLogStatsResponse {
    /// Total accesses in the window
    pub total_accesses: usize,

    /// Approved accesses
    pub approved: usize,

    /// Denied accesses
    pub denied: usize,

    /// Accesses within the last 24 hours
    pub recent_24h: usize,

    /// Up to five most active organizations
    pub top_organizations: Vec<OrganizationCountResponse>,

    /// Access counts per data type, most accessed first
    pub data_types_accessed: Vec<DataTypeCountResponse>,
}

impl From<AccessLogStats> for AccessLogStatsResponse {
    fn from(stats: AccessLogStats) -> Self {
        AccessLogStatsResponse {
            total_accesses: stats.total_accesses,
            approved: stats.approved,
            denied: stats.denied,
            recent_24h: stats.recent_24h,
            top_organizations: stats.top_organizations.into_iter().map(Into::into).collect(),
            data_types_accessed: stats
                .data_types_accessed
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Access Log Stats Handler
///
/// Returns access statistics for a user over a look-back window.
#[endpoint(tags("access-logs"), summary = "Access Log Stats")]
pub(crate) async fn handler(
    user_id: QueryParam<String, true>,
    days: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<AccessLogStatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stats = state
        .app
        .access_logs
        .access_stats(
            &user_id.into_inner(),
            days.into_inner().unwrap_or(DEFAULT_WINDOW_DAYS),
        )
        .await
        .or_500("failed to compute access stats")?;

    Ok(Json(stats.into()))
}
