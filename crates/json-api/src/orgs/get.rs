//! Get Organization Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::organizations::records::OrganizationRecord;

use crate::{extensions::*, orgs::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrganizationResponse {
    /// The unique identifier of the organization
    pub id: String,

    /// The display name of the organization
    pub name: String,

    /// Icon name used by the client
    pub logo: String,

    /// Trust score on a 0-10 scale
    pub trust_score: f64,

    /// Whether the user currently has an active consent with this organization
    pub consent_active: bool,

    /// The data types this organization may access
    pub data_types: Vec<String>,

    /// Optional description of the organization
    pub description: Option<String>,

    /// Optional sector category
    pub category: Option<String>,
}

impl From<OrganizationRecord> for OrganizationResponse {
    fn from(org: OrganizationRecord) -> Self {
        OrganizationResponse {
            id: org.id,
            name: org.name,
            logo: org.logo,
            trust_score: org.trust_score,
            consent_active: org.consent_active,
            data_types: org.data_types,
            description: org.description,
            category: org.category,
        }
    }
}

/// Get Organization Handler
///
/// Returns an organization.
#[endpoint(tags("orgs"), summary = "Get Organization")]
pub(crate) async fn handler(
    org: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrganizationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let org = state
        .app
        .orgs
        .get_organization(&org.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(org.into()))
}
