//! Organization Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::organizations::data::OrgFilter;

use crate::{extensions::*, orgs::get::OrganizationResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrganizationsResponse {
    /// The list of organizations
    pub organizations: Vec<OrganizationResponse>,

    /// Number of organizations returned
    pub total: usize,
}

/// Organization Index Handler
///
/// Returns a list of organizations.
#[endpoint(tags("orgs"), summary = "List Organizations")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    active_only: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<OrganizationsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = OrgFilter {
        category: category.into_inner(),
        active_only: active_only.into_inner().unwrap_or(false),
    };

    let organizations = state
        .app
        .orgs
        .list_organizations(filter)
        .await
        .or_500("failed to fetch organizations")?;

    let organizations: Vec<OrganizationResponse> =
        organizations.into_iter().map(Into::into).collect();

    Ok(Json(OrganizationsResponse {
        total: organizations.len(),
        organizations,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trustbase_app::domain::organizations::{MockOrgsService, records::OrganizationRecord};

    use crate::test_helpers::orgs_service;

    use super::*;

    fn make_org(id: &str, name: &str) -> OrganizationRecord {
        OrganizationRecord {
            id: id.to_string(),
            name: name.to_string(),
            logo: "business".to_string(),
            trust_score: 7.0,
            consent_active: true,
            data_types: vec![],
            description: None,
            category: Some("Fintech".to_string()),
        }
    }

    fn make_service(orgs: MockOrgsService) -> Service {
        orgs_service(orgs, Router::with_path("orgs").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_organizations_with_total() -> TestResult {
        let mut orgs = MockOrgsService::new();

        orgs.expect_list_organizations()
            .once()
            .withf(|filter| filter.category.is_none() && !filter.active_only)
            .return_once(|_| Ok(vec![make_org("org_1", "First Bank"), make_org("org_2", "MTN")]));

        orgs.expect_get_organization().never();
        orgs.expect_list_categories().never();
        orgs.expect_trust_score_summary().never();

        let response: OrganizationsResponse = TestClient::get("http://example.com/orgs")
            .send(&make_service(orgs))
            .await
            .take_json()
            .await?;

        assert_eq!(response.total, 2);
        assert_eq!(response.organizations[0].id, "org_1");
        assert_eq!(response.organizations[1].id, "org_2");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_filters() -> TestResult {
        let mut orgs = MockOrgsService::new();

        orgs.expect_list_organizations()
            .once()
            .withf(|filter| filter.category.as_deref() == Some("Fintech") && filter.active_only)
            .return_once(|_| Ok(vec![]));

        orgs.expect_get_organization().never();
        orgs.expect_list_categories().never();
        orgs.expect_trust_score_summary().never();

        let res = TestClient::get("http://example.com/orgs?category=Fintech&active_only=true")
            .send(&make_service(orgs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut orgs = MockOrgsService::new();

        orgs.expect_list_organizations()
            .once()
            .return_once(|_| Ok(vec![]));

        orgs.expect_get_organization().never();
        orgs.expect_list_categories().never();
        orgs.expect_trust_score_summary().never();

        let response: OrganizationsResponse = TestClient::get("http://example.com/orgs")
            .send(&make_service(orgs))
            .await
            .take_json()
            .await?;

        assert!(response.organizations.is_empty());
        assert_eq!(response.total, 0);

        Ok(())
    }
}
