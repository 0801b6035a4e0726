//! Access Logs Data

use crate::aggregate::GroupCount;

/// Default look-back window for listing and statistics, in whole days.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Default result limit for listings.
pub const DEFAULT_LIMIT: i64 = 50;

/// Window for the "recent" access count, in whole hours.
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// Access-log list filter. The owning user is always required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogFilter {
    pub user_id: String,
    pub organization_id: Option<String>,
    pub status: Option<String>,
    pub data_type: Option<String>,
    /// Look-back window in whole days.
    pub days: i64,
    /// Maximum records returned; zero or below yields none.
    pub limit: i64,
}

impl AccessLogFilter {
    /// Filter with only the required user predicate and default window.
    #[must_use]
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            organization_id: None,
            status: None,
            data_type: None,
            days: DEFAULT_WINDOW_DAYS,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// New simulated access-log entry; the demo always approves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccessLog {
    pub user_id: String,
    pub organization_id: String,
    pub data_type: String,
    pub purpose: String,
}

/// Per-user access statistics over a look-back window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessLogStats {
    pub total_accesses: usize,
    pub approved: usize,
    pub denied: usize,
    /// Accesses within the last [`RECENT_WINDOW_HOURS`] hours.
    pub recent_24h: usize,
    /// Top five organizations by access count.
    pub top_organizations: Vec<GroupCount>,
    /// Full data-type histogram, untruncated.
    pub data_types_accessed: Vec<GroupCount>,
}
