//! Grant Consent Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::consents::data::NewConsent;

use crate::{consents::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GrantConsentRequest {
    /// The user granting the consent
    pub user_id: String,

    /// The organization the consent is granted to
    pub organization_id: String,

    /// The data types covered by the consent
    pub data_types: Vec<String>,

    /// The stated purpose of the consent
    pub purpose: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GrantConsentResponse {
    /// Whether the grant succeeded
    pub success: bool,

    /// Human-readable outcome
    pub message: String,

    /// Identifier of the newly created consent
    pub consent_id: String,
}

/// Grant Consent Handler
///
/// Creates an active consent with a one-year expiry.
#[endpoint(tags("consents"), summary = "Grant Consent")]
pub(crate) async fn handler(
    body: JsonBody<GrantConsentRequest>,
    depot: &mut Depot,
) -> Result<Json<GrantConsentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = body.into_inner();

    let consent = state
        .app
        .consents
        .grant_consent(NewConsent {
            user_id: request.user_id,
            organization_id: request.organization_id,
            data_types: request.data_types,
            purpose: request.purpose,
        })
        .await
        .map_err(into_status_error)?;

    Ok(Json(GrantConsentResponse {
        success: true,
        message: "Consent granted successfully".to_string(),
        consent_id: consent.id,
    }))
}
