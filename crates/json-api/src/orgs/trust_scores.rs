//! Trust Score Summary Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use trustbase_app::aggregate::TrustScoreSummary;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrustScoreDistributionResponse {
    /// Scores of 9.0 and above
    pub excellent: u64,

    /// Scores from 7.5 up to 9.0
    pub good: u64,

    /// Scores from 6.0 up to 7.5
    pub fair: u64,

    /// Scores below 6.0
    pub poor: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrustScoreSummaryResponse {
    /// Mean trust score across all organizations
    pub average: f64,

    /// Highest trust score
    pub highest: f64,

    /// Lowest trust score
    pub lowest: f64,

    /// Score counts per quality bucket
    pub distribution: TrustScoreDistributionResponse,
}

impl From<TrustScoreSummary> for TrustScoreSummaryResponse {
    fn from(summary: TrustScoreSummary) -> Self {
        TrustScoreSummaryResponse {
            average: summary.average,
            highest: summary.highest,
            lowest: summary.lowest,
            distribution: TrustScoreDistributionResponse {
                excellent: summary.distribution.excellent,
                good: summary.distribution.good,
                fair: summary.distribution.fair,
                poor: summary.distribution.poor,
            },
        }
    }
}

/// Trust Score Summary Handler
///
/// Returns trust-score statistics across all organizations.
#[endpoint(tags("orgs"), summary = "Trust Score Summary")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<TrustScoreSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .orgs
        .trust_score_summary()
        .await
        .or_500("failed to compute trust score summary")?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trustbase_app::{aggregate::TrustScoreDistribution, domain::organizations::MockOrgsService};

    use crate::test_helpers::orgs_service;

    use super::*;

    fn make_service(orgs: MockOrgsService) -> Service {
        orgs_service(
            orgs,
            Router::with_path("orgs/trust-scores/summary").get(handler),
        )
    }

    #[tokio::test]
    async fn test_summary_returns_buckets() -> TestResult {
        let mut orgs = MockOrgsService::new();

        orgs.expect_trust_score_summary().once().return_once(|| {
            Ok(TrustScoreSummary {
                average: 8.26,
                highest: 9.1,
                lowest: 7.2,
                distribution: TrustScoreDistribution {
                    excellent: 1,
                    good: 3,
                    fair: 1,
                    poor: 0,
                },
            })
        });

        orgs.expect_list_organizations().never();
        orgs.expect_get_organization().never();
        orgs.expect_list_categories().never();

        let response: TrustScoreSummaryResponse =
            TestClient::get("http://example.com/orgs/trust-scores/summary")
                .send(&make_service(orgs))
                .await
                .take_json()
                .await?;

        assert_eq!(response.highest, 9.1);
        assert_eq!(response.distribution.good, 3);
        assert_eq!(response.distribution.poor, 0);

        Ok(())
    }
}
