//! Access-logs service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    aggregate,
    domain::{
        access_logs::{
            data::{AccessLogFilter, AccessLogStats, NewAccessLog, RECENT_WINDOW_HOURS},
            errors::AccessLogsServiceError,
            records::{AccessLogRecord, AccessStatus},
        },
        organizations::records::{UNKNOWN_ORGANIZATION_LOGO, UNKNOWN_ORGANIZATION_NAME},
    },
    ids::IdSource,
    query::{self, Query},
    store::Store,
};

const SIMULATED_IP: &str = "192.168.1.1";
const SIMULATED_USER_AGENT: &str = "Demo-Client/1.0";

/// In-memory access-logs service over the shared store.
#[derive(Clone)]
pub struct MemAccessLogsService {
    store: Arc<Store>,
    ids: Arc<dyn IdSource>,
}

impl MemAccessLogsService {
    #[must_use]
    pub fn new(store: Arc<Store>, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }
}

#[async_trait]
impl AccessLogsService for MemAccessLogsService {
    async fn list_access_logs(
        &self,
        filter: AccessLogFilter,
    ) -> Result<Vec<AccessLogRecord>, AccessLogsServiceError> {
        let user_id = filter.user_id;

        let mut query = Query::new()
            .filter(move |log: &AccessLogRecord| log.user_id == user_id)
            .filter_eq(filter.organization_id, |log: &AccessLogRecord| {
                &log.organization_id
            })
            .filter_eq(filter.data_type, |log: &AccessLogRecord| &log.data_type)
            .since(query::days_ago(filter.days))
            .limit(filter.limit);

        if let Some(status) = filter.status {
            query = query.filter(move |log: &AccessLogRecord| log.status.as_str() == status);
        }

        Ok(query.newest_first(&self.store.access_logs.read().await))
    }

    async fn get_access_log(&self, log: &str) -> Result<AccessLogRecord, AccessLogsServiceError> {
        self.store
            .access_logs
            .read()
            .await
            .iter()
            .find(|candidate| candidate.id == log)
            .cloned()
            .ok_or(AccessLogsServiceError::NotFound)
    }

    async fn access_stats(
        &self,
        user: &str,
        days: i64,
    ) -> Result<AccessLogStats, AccessLogsServiceError> {
        let user = user.to_string();

        let logs = Query::new()
            .filter(move |log: &AccessLogRecord| log.user_id == user)
            .since(query::days_ago(days))
            .newest_first(&self.store.access_logs.read().await);

        let approved = logs
            .iter()
            .filter(|log| log.status == AccessStatus::Approved)
            .count();
        let denied = logs
            .iter()
            .filter(|log| log.status == AccessStatus::Denied)
            .count();

        let recent_cutoff = query::hours_ago(RECENT_WINDOW_HOURS);
        let recent_24h = logs
            .iter()
            .filter(|log| log.timestamp >= recent_cutoff)
            .count();

        let top_organizations = aggregate::top_n(
            aggregate::grouped_counts(logs.iter().map(|log| log.organization_name.as_str())),
            5,
        );
        let data_types_accessed =
            aggregate::grouped_counts(logs.iter().map(|log| log.data_type.as_str()));

        Ok(AccessLogStats {
            total_accesses: logs.len(),
            approved,
            denied,
            recent_24h,
            top_organizations,
            data_types_accessed,
        })
    }

    async fn simulate_access(
        &self,
        new: NewAccessLog,
    ) -> Result<AccessLogRecord, AccessLogsServiceError> {
        let (organization_name, organization_logo) = self
            .store
            .organizations
            .read()
            .await
            .iter()
            .find(|org| org.id == new.organization_id)
            .map_or_else(
                || {
                    (
                        UNKNOWN_ORGANIZATION_NAME.to_string(),
                        UNKNOWN_ORGANIZATION_LOGO.to_string(),
                    )
                },
                |org| (org.name.clone(), org.logo.clone()),
            );

        let record = AccessLogRecord {
            id: self.ids.generate("log"),
            user_id: new.user_id,
            organization_id: new.organization_id,
            organization_name,
            organization_logo,
            data_type: new.data_type,
            purpose: new.purpose,
            timestamp: Timestamp::now(),
            // The demo always approves simulated accesses.
            status: AccessStatus::Approved,
            ip_address: Some(SIMULATED_IP.to_string()),
            user_agent: Some(SIMULATED_USER_AGENT.to_string()),
        };

        self.store.access_logs.write().await.push(record.clone());

        info!(log = %record.id, organization = %record.organization_id, "access log simulated");

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait AccessLogsService: Send + Sync {
    /// Retrieve the user's access logs, newest first, windowed and limited.
    async fn list_access_logs(
        &self,
        filter: AccessLogFilter,
    ) -> Result<Vec<AccessLogRecord>, AccessLogsServiceError>;

    /// Retrieve a single access log by id.
    async fn get_access_log(&self, log: &str) -> Result<AccessLogRecord, AccessLogsServiceError>;

    /// Access statistics for the user over a look-back window of whole days.
    async fn access_stats(
        &self,
        user: &str,
        days: i64,
    ) -> Result<AccessLogStats, AccessLogsServiceError>;

    /// Append an always-approved simulated access-log record.
    async fn simulate_access(
        &self,
        new: NewAccessLog,
    ) -> Result<AccessLogRecord, AccessLogsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{ids::UuidIdSource, seed::SeedData};

    use super::*;

    fn service(seed: SeedData) -> MemAccessLogsService {
        MemAccessLogsService::new(Arc::new(Store::from_seed(seed)), Arc::new(UuidIdSource))
    }

    fn demo_service() -> MemAccessLogsService {
        service(SeedData::demo())
    }

    #[tokio::test]
    async fn list_returns_user_logs_newest_first() -> TestResult {
        let logs = demo_service()
            .list_access_logs(AccessLogFilter::for_user("demo_user_1"))
            .await?;

        assert_eq!(logs.len(), 10);

        for pair in logs.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }

        Ok(())
    }

    #[tokio::test]
    async fn list_applies_all_filters_conjunctively() -> TestResult {
        let logs = demo_service()
            .list_access_logs(AccessLogFilter {
                organization_id: Some("org_1".to_string()),
                status: Some("approved".to_string()),
                ..AccessLogFilter::for_user("demo_user_1")
            })
            .await?;

        assert_eq!(logs.len(), 3);
        assert!(logs.iter().all(|log| {
            log.organization_id == "org_1" && log.status == AccessStatus::Approved
        }));

        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_data_type() -> TestResult {
        let logs = demo_service()
            .list_access_logs(AccessLogFilter {
                data_type: Some("Usage Data".to_string()),
                ..AccessLogFilter::for_user("demo_user_1")
            })
            .await?;

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].id, "log_2");

        Ok(())
    }

    #[tokio::test]
    async fn limit_zero_returns_nothing() -> TestResult {
        let logs = demo_service()
            .list_access_logs(AccessLogFilter {
                limit: 0,
                ..AccessLogFilter::for_user("demo_user_1")
            })
            .await?;

        assert!(logs.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn zero_day_window_excludes_historical_seed() -> TestResult {
        let logs = demo_service()
            .list_access_logs(AccessLogFilter {
                days: 0,
                ..AccessLogFilter::for_user("demo_user_1")
            })
            .await?;

        assert!(logs.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn day_window_drops_older_records() -> TestResult {
        // Seed logs span roughly six days; a two-day window keeps the four
        // records under 48 hours old.
        let logs = demo_service()
            .list_access_logs(AccessLogFilter {
                days: 2,
                ..AccessLogFilter::for_user("demo_user_1")
            })
            .await?;

        assert_eq!(logs.len(), 4);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_has_no_logs() -> TestResult {
        let logs = demo_service()
            .list_access_logs(AccessLogFilter::for_user("someone_else"))
            .await?;

        assert!(logs.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_log_returns_not_found() {
        let result = demo_service().get_access_log("log_404").await;

        assert!(
            matches!(result, Err(AccessLogsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn stats_over_demo_seed() -> TestResult {
        let stats = demo_service().access_stats("demo_user_1", 30).await?;

        assert_eq!(stats.total_accesses, 10);
        assert_eq!(stats.approved, 8);
        assert_eq!(stats.denied, 2);
        assert_eq!(stats.recent_24h, 2);

        let top: Vec<&str> = stats
            .top_organizations
            .iter()
            .map(|g| g.label.as_str())
            .collect();

        // First Bank and MTN tie at three; First Bank was seen first.
        assert_eq!(top, ["First Bank Nigeria", "MTN Nigeria", "Paystack", "Jumia"]);
        assert_eq!(stats.data_types_accessed.len(), 10);

        Ok(())
    }

    #[tokio::test]
    async fn stats_counts_match_statuses() -> TestResult {
        let mut seed = SeedData::demo();
        seed.access_logs.truncate(0);

        let service = service(seed);

        for _ in 0..2 {
            service
                .simulate_access(NewAccessLog {
                    user_id: "demo_user_1".to_string(),
                    organization_id: "org_1".to_string(),
                    data_type: "Financial Data".to_string(),
                    purpose: "Verification".to_string(),
                })
                .await?;
        }

        // One denied record appended directly; simulate always approves.
        service.store.access_logs.write().await.push(AccessLogRecord {
            id: "log_denied".to_string(),
            user_id: "demo_user_1".to_string(),
            organization_id: "org_3".to_string(),
            organization_name: "Jumia".to_string(),
            organization_logo: "shopping_cart".to_string(),
            data_type: "Purchase History".to_string(),
            purpose: "Recommendations".to_string(),
            timestamp: Timestamp::now(),
            status: AccessStatus::Denied,
            ip_address: None,
            user_agent: None,
        });

        let stats = service.access_stats("demo_user_1", 30).await?;

        assert_eq!(stats.total_accesses, 3);
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.denied, 1);

        Ok(())
    }

    #[tokio::test]
    async fn simulate_appends_approved_record() -> TestResult {
        let service = demo_service();

        let record = service
            .simulate_access(NewAccessLog {
                user_id: "demo_user_1".to_string(),
                organization_id: "org_5".to_string(),
                data_type: "Merchant Data".to_string(),
                purpose: "Settlement audit".to_string(),
            })
            .await?;

        assert_eq!(record.status, AccessStatus::Approved);
        assert_eq!(record.organization_name, "Flutterwave");

        let fetched = service.get_access_log(&record.id).await?;

        assert_eq!(fetched, record);

        Ok(())
    }

    #[tokio::test]
    async fn simulate_with_unknown_organization_uses_placeholders() -> TestResult {
        let record = demo_service()
            .simulate_access(NewAccessLog {
                user_id: "demo_user_1".to_string(),
                organization_id: "org_404".to_string(),
                data_type: "Contact Info".to_string(),
                purpose: "Outreach".to_string(),
            })
            .await?;

        assert_eq!(record.organization_name, UNKNOWN_ORGANIZATION_NAME);
        assert_eq!(record.organization_logo, UNKNOWN_ORGANIZATION_LOGO);

        Ok(())
    }
}
