//! Revoke Consent Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::consents::data::ConsentRevocation;

use crate::{consents::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RevokeConsentRequest {
    /// The user revoking the consent
    pub user_id: String,

    /// The organization whose active consent is revoked
    pub organization_id: String,

    /// Optional revocation reason recorded in history
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RevokeConsentResponse {
    /// Whether the revocation succeeded
    pub success: bool,

    /// Human-readable outcome
    pub message: String,

    /// Identifier of the revoked consent
    pub consent_id: String,
}

/// Revoke Consent Handler
///
/// Revokes the user's active consent for an organization.
#[endpoint(tags("consents"), summary = "Revoke Consent")]
pub(crate) async fn handler(
    body: JsonBody<RevokeConsentRequest>,
    depot: &mut Depot,
) -> Result<Json<RevokeConsentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = body.into_inner();

    let consent = state
        .app
        .consents
        .revoke_consent(ConsentRevocation {
            user_id: request.user_id,
            organization_id: request.organization_id,
            reason: request.reason,
        })
        .await
        .map_err(into_status_error)?;

    Ok(Json(RevokeConsentResponse {
        success: true,
        message: format!("Consent revoked for {}", consent.organization_name),
        consent_id: consent.id,
    }))
}
