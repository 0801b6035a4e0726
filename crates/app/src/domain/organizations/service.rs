//! Organizations service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    aggregate::{self, TrustScoreSummary},
    domain::organizations::{
        data::OrgFilter, errors::OrgsServiceError, records::OrganizationRecord,
    },
    query::Query,
    store::Store,
};

/// In-memory organizations service over the shared store.
#[derive(Debug, Clone)]
pub struct MemOrgsService {
    store: Arc<Store>,
}

impl MemOrgsService {
    #[must_use]
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrgsService for MemOrgsService {
    async fn list_organizations(
        &self,
        filter: OrgFilter,
    ) -> Result<Vec<OrganizationRecord>, OrgsServiceError> {
        let mut query = Query::new();

        if let Some(category) = filter.category {
            query = query
                .filter(move |org: &OrganizationRecord| org.category.as_deref() == Some(&category));
        }

        if filter.active_only {
            query = query.filter(|org: &OrganizationRecord| org.consent_active);
        }

        Ok(query.matching(&self.store.organizations.read().await))
    }

    async fn get_organization(&self, org: &str) -> Result<OrganizationRecord, OrgsServiceError> {
        self.store
            .organizations
            .read()
            .await
            .iter()
            .find(|candidate| candidate.id == org)
            .cloned()
            .ok_or(OrgsServiceError::NotFound)
    }

    async fn list_categories(&self) -> Result<Vec<String>, OrgsServiceError> {
        let organizations = self.store.organizations.read().await;

        let mut categories: Vec<String> = organizations
            .iter()
            .map(|org| org.category_label().to_string())
            .collect();

        categories.sort();
        categories.dedup();

        Ok(categories)
    }

    async fn trust_score_summary(&self) -> Result<TrustScoreSummary, OrgsServiceError> {
        let scores: Vec<f64> = self
            .store
            .organizations
            .read()
            .await
            .iter()
            .map(|org| org.trust_score)
            .collect();

        Ok(aggregate::trust_score_summary(&scores))
    }
}

#[automock]
#[async_trait]
pub trait OrgsService: Send + Sync {
    /// Retrieve organizations matching the filter, in seed order.
    async fn list_organizations(
        &self,
        filter: OrgFilter,
    ) -> Result<Vec<OrganizationRecord>, OrgsServiceError>;

    /// Retrieve a single organization by id.
    async fn get_organization(&self, org: &str) -> Result<OrganizationRecord, OrgsServiceError>;

    /// Sorted unique category labels.
    async fn list_categories(&self) -> Result<Vec<String>, OrgsServiceError>;

    /// Trust-score statistics across all organizations.
    async fn trust_score_summary(&self) -> Result<TrustScoreSummary, OrgsServiceError>;
}
