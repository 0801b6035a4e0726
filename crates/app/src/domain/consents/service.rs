//! Consents service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{Span, Timestamp, tz::TimeZone};
use mockall::automock;
use rustc_hash::FxHashSet;
use tracing::info;

use crate::{
    domain::{
        consents::{
            data::{ConsentFilter, ConsentRevocation, ConsentStats, NewConsent},
            errors::ConsentsServiceError,
            records::{ConsentAction, ConsentHistoryRecord, ConsentRecord, ConsentStatus},
        },
        organizations::records::UNKNOWN_ORGANIZATION_NAME,
    },
    ids::IdSource,
    query::Query,
    store::Store,
};

const DEFAULT_REVOCATION_REASON: &str = "User requested consent revocation";

/// In-memory consents service over the shared store.
#[derive(Clone)]
pub struct MemConsentsService {
    store: Arc<Store>,
    ids: Arc<dyn IdSource>,
}

impl MemConsentsService {
    #[must_use]
    pub fn new(store: Arc<Store>, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }

    async fn organization_name(&self, organization_id: &str) -> String {
        self.store
            .organizations
            .read()
            .await
            .iter()
            .find(|org| org.id == organization_id)
            .map_or_else(
                || UNKNOWN_ORGANIZATION_NAME.to_string(),
                |org| org.name.clone(),
            )
    }

    async fn append_history(
        &self,
        consent_id: &str,
        action: ConsentAction,
        timestamp: Timestamp,
        data_types: Vec<String>,
        reason: String,
    ) {
        let entry = ConsentHistoryRecord {
            id: self.ids.generate("history"),
            consent_id: consent_id.to_string(),
            action,
            timestamp,
            data_types: Some(data_types),
            reason: Some(reason),
        };

        self.store.consent_history.write().await.push(entry);
    }
}

fn one_year_after(at: Timestamp) -> Timestamp {
    at.to_zoned(TimeZone::UTC)
        .saturating_add(Span::new().years(1))
        .timestamp()
}

#[async_trait]
impl ConsentsService for MemConsentsService {
    async fn list_consents(
        &self,
        filter: ConsentFilter,
    ) -> Result<Vec<ConsentRecord>, ConsentsServiceError> {
        let user_id = filter.user_id;

        let mut query =
            Query::new().filter(move |consent: &ConsentRecord| consent.user_id == user_id);

        if let Some(status) = filter.status {
            query = query.filter(move |consent: &ConsentRecord| consent.status.as_str() == status);
        }

        query = query.filter_eq(filter.organization_id, |consent: &ConsentRecord| {
            &consent.organization_id
        });

        Ok(query.newest_first(&self.store.consents.read().await))
    }

    async fn get_consent(&self, consent: &str) -> Result<ConsentRecord, ConsentsServiceError> {
        self.store
            .consents
            .read()
            .await
            .iter()
            .find(|candidate| candidate.id == consent)
            .cloned()
            .ok_or(ConsentsServiceError::NotFound)
    }

    async fn grant_consent(&self, new: NewConsent) -> Result<ConsentRecord, ConsentsServiceError> {
        let granted_at = Timestamp::now();
        let organization_name = self.organization_name(&new.organization_id).await;

        let record = ConsentRecord {
            id: self.ids.generate("consent"),
            user_id: new.user_id,
            organization_id: new.organization_id,
            organization_name,
            data_types: new.data_types,
            purpose: new.purpose,
            status: ConsentStatus::Active,
            granted_at,
            revoked_at: None,
            expires_at: Some(one_year_after(granted_at)),
        };

        self.store.consents.write().await.push(record.clone());

        self.append_history(
            &record.id,
            ConsentAction::Granted,
            granted_at,
            record.data_types.clone(),
            format!("Consent granted for: {}", record.purpose),
        )
        .await;

        info!(consent = %record.id, organization = %record.organization_id, "consent granted");

        Ok(record)
    }

    async fn revoke_consent(
        &self,
        revocation: ConsentRevocation,
    ) -> Result<ConsentRecord, ConsentsServiceError> {
        let revoked_at = Timestamp::now();

        let record = {
            let mut consents = self.store.consents.write().await;

            let consent = consents
                .iter_mut()
                .find(|consent| {
                    consent.user_id == revocation.user_id
                        && consent.organization_id == revocation.organization_id
                        && consent.status == ConsentStatus::Active
                })
                .ok_or(ConsentsServiceError::NoActiveConsent)?;

            consent.status = ConsentStatus::Revoked;
            consent.revoked_at = Some(revoked_at);

            consent.clone()
        };

        self.append_history(
            &record.id,
            ConsentAction::Revoked,
            revoked_at,
            record.data_types.clone(),
            revocation
                .reason
                .unwrap_or_else(|| DEFAULT_REVOCATION_REASON.to_string()),
        )
        .await;

        info!(consent = %record.id, organization = %record.organization_id, "consent revoked");

        Ok(record)
    }

    async fn consent_history(
        &self,
        consent: &str,
    ) -> Result<Vec<ConsentHistoryRecord>, ConsentsServiceError> {
        let consent = consent.to_string();

        let query = Query::new()
            .filter(move |entry: &ConsentHistoryRecord| entry.consent_id == consent);

        Ok(query.newest_first(&self.store.consent_history.read().await))
    }

    async fn consent_stats(&self, user: &str) -> Result<ConsentStats, ConsentsServiceError> {
        let consents = self.store.consents.read().await;

        let mine: Vec<&ConsentRecord> = consents
            .iter()
            .filter(|consent| consent.user_id == user)
            .collect();

        let total = mine.len();
        let active = mine
            .iter()
            .filter(|c| c.status == ConsentStatus::Active)
            .count();
        let revoked = mine
            .iter()
            .filter(|c| c.status == ConsentStatus::Revoked)
            .count();

        let organizations: FxHashSet<&str> = mine
            .iter()
            .map(|c| c.organization_id.as_str())
            .collect();

        Ok(ConsentStats {
            total,
            active,
            revoked,
            // Derived, never stored; see data.rs.
            expired: total - active - revoked,
            organizations: organizations.len(),
        })
    }
}

#[automock]
#[async_trait]
pub trait ConsentsService: Send + Sync {
    /// Retrieve the user's consents, newest grant first.
    async fn list_consents(
        &self,
        filter: ConsentFilter,
    ) -> Result<Vec<ConsentRecord>, ConsentsServiceError>;

    /// Retrieve a single consent by id.
    async fn get_consent(&self, consent: &str) -> Result<ConsentRecord, ConsentsServiceError>;

    /// Create an active consent with a one-year expiry and record a
    /// "granted" history entry.
    async fn grant_consent(&self, new: NewConsent) -> Result<ConsentRecord, ConsentsServiceError>;

    /// Revoke the active consent for the (user, organization) pair and
    /// record a "revoked" history entry.
    async fn revoke_consent(
        &self,
        revocation: ConsentRevocation,
    ) -> Result<ConsentRecord, ConsentsServiceError>;

    /// History entries for one consent, newest first.
    async fn consent_history(
        &self,
        consent: &str,
    ) -> Result<Vec<ConsentHistoryRecord>, ConsentsServiceError>;

    /// Per-user consent counts and distinct-organization count.
    async fn consent_stats(&self, user: &str) -> Result<ConsentStats, ConsentsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{ids::UuidIdSource, seed::SeedData};

    use super::*;

    fn service(seed: SeedData) -> MemConsentsService {
        MemConsentsService::new(Arc::new(Store::from_seed(seed)), Arc::new(UuidIdSource))
    }

    fn demo_service() -> MemConsentsService {
        service(SeedData::demo())
    }

    fn new_consent(organization_id: &str) -> NewConsent {
        NewConsent {
            user_id: "demo_user_1".to_string(),
            organization_id: organization_id.to_string(),
            data_types: vec!["Payment Info".to_string(), "Merchant Data".to_string()],
            purpose: "Settlement reconciliation".to_string(),
        }
    }

    #[tokio::test]
    async fn list_filters_by_user() -> TestResult {
        let consents = demo_service()
            .list_consents(ConsentFilter {
                user_id: "demo_user_1".to_string(),
                status: None,
                organization_id: None,
            })
            .await?;

        assert_eq!(consents.len(), 4);

        Ok(())
    }

    #[tokio::test]
    async fn list_is_sorted_newest_grant_first() -> TestResult {
        let consents = demo_service()
            .list_consents(ConsentFilter {
                user_id: "demo_user_1".to_string(),
                status: None,
                organization_id: None,
            })
            .await?;

        for pair in consents.windows(2) {
            assert!(pair[0].granted_at >= pair[1].granted_at);
        }

        Ok(())
    }

    #[tokio::test]
    async fn status_filter_keeps_matching_consents() -> TestResult {
        let consents = demo_service()
            .list_consents(ConsentFilter {
                user_id: "demo_user_1".to_string(),
                status: Some("revoked".to_string()),
                organization_id: None,
            })
            .await?;

        assert_eq!(consents.len(), 1);
        assert_eq!(consents[0].organization_name, "Jumia");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_status_filter_matches_nothing() -> TestResult {
        let consents = demo_service()
            .list_consents(ConsentFilter {
                user_id: "demo_user_1".to_string(),
                status: Some("paused".to_string()),
                organization_id: None,
            })
            .await?;

        assert!(consents.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_consent_returns_not_found() {
        let result = demo_service().get_consent("consent_404").await;

        assert!(
            matches!(result, Err(ConsentsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn grant_then_history_round_trip() -> TestResult {
        let service = demo_service();

        let granted = service.grant_consent(new_consent("org_5")).await?;
        let history = service.consent_history(&granted.id).await?;

        assert_eq!(history.len(), 1, "expected exactly one history entry");
        assert_eq!(history[0].action, ConsentAction::Granted);
        assert_eq!(history[0].data_types.as_deref(), Some(granted.data_types.as_slice()));

        Ok(())
    }

    #[tokio::test]
    async fn grant_sets_one_year_expiry() -> TestResult {
        let granted = demo_service().grant_consent(new_consent("org_5")).await?;

        let expires_at = granted.expires_at.ok_or("missing expiry")?;

        assert_eq!(expires_at, one_year_after(granted.granted_at));
        assert!(expires_at > granted.granted_at);

        Ok(())
    }

    #[tokio::test]
    async fn grant_for_unknown_organization_uses_placeholder_name() -> TestResult {
        let granted = demo_service().grant_consent(new_consent("org_404")).await?;

        assert_eq!(granted.organization_name, UNKNOWN_ORGANIZATION_NAME);

        Ok(())
    }

    #[tokio::test]
    async fn revoke_updates_status_and_appends_history() -> TestResult {
        let service = demo_service();

        let revoked = service
            .revoke_consent(ConsentRevocation {
                user_id: "demo_user_1".to_string(),
                organization_id: "org_1".to_string(),
                reason: Some("Closing my account".to_string()),
            })
            .await?;

        assert_eq!(revoked.status, ConsentStatus::Revoked);
        assert!(revoked.revoked_at.is_some());

        let history = service.consent_history(&revoked.id).await?;
        let entry = history.first().ok_or("missing history entry")?;

        assert_eq!(entry.action, ConsentAction::Revoked);
        assert_eq!(entry.reason.as_deref(), Some("Closing my account"));

        Ok(())
    }

    #[tokio::test]
    async fn revoke_without_reason_uses_default() -> TestResult {
        let service = demo_service();

        let revoked = service
            .revoke_consent(ConsentRevocation {
                user_id: "demo_user_1".to_string(),
                organization_id: "org_2".to_string(),
                reason: None,
            })
            .await?;

        let history = service.consent_history(&revoked.id).await?;
        let entry = history.first().ok_or("missing history entry")?;

        assert_eq!(entry.reason.as_deref(), Some(DEFAULT_REVOCATION_REASON));

        Ok(())
    }

    #[tokio::test]
    async fn revoking_twice_fails_the_second_time() -> TestResult {
        let service = demo_service();

        let revocation = ConsentRevocation {
            user_id: "demo_user_1".to_string(),
            organization_id: "org_4".to_string(),
            reason: None,
        };

        service.revoke_consent(revocation.clone()).await?;

        let result = service.revoke_consent(revocation).await;

        assert!(
            matches!(result, Err(ConsentsServiceError::NoActiveConsent)),
            "expected NoActiveConsent, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn revoke_already_revoked_seed_pair_fails() {
        // consent_3 (Jumia) is seeded as revoked.
        let result = demo_service()
            .revoke_consent(ConsentRevocation {
                user_id: "demo_user_1".to_string(),
                organization_id: "org_3".to_string(),
                reason: None,
            })
            .await;

        assert!(
            matches!(result, Err(ConsentsServiceError::NoActiveConsent)),
            "expected NoActiveConsent, got {result:?}"
        );
    }

    #[tokio::test]
    async fn history_of_unknown_consent_is_empty() -> TestResult {
        let history = demo_service().consent_history("consent_404").await?;

        assert!(history.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn stats_over_demo_seed() -> TestResult {
        let stats = demo_service().consent_stats("demo_user_1").await?;

        assert_eq!(
            stats,
            ConsentStats {
                total: 4,
                active: 3,
                revoked: 1,
                expired: 0,
                organizations: 4,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn stats_derive_expired_by_subtraction() -> TestResult {
        let mut seed = SeedData::demo();

        if let Some(consent) = seed.consents.first_mut() {
            consent.status = ConsentStatus::Expired;
        }

        let stats = service(seed).consent_stats("demo_user_1").await?;

        assert_eq!(stats.active, 2);
        assert_eq!(stats.expired, 1);

        Ok(())
    }
}
