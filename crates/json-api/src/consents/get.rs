//! Get Consent Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::consents::records::ConsentRecord;

use crate::{consents::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConsentResponse {
    /// The unique identifier of the consent
    pub id: String,

    /// The user who granted the consent
    pub user_id: String,

    /// The organization the consent was granted to
    pub organization_id: String,

    /// Organization display name captured at grant time
    pub organization_name: String,

    /// The data types covered by the consent
    pub data_types: Vec<String>,

    /// The stated purpose of the consent
    pub purpose: String,

    /// Consent status (active, revoked, expired)
    pub status: String,

    /// The date and time the consent was granted
    pub granted_at: String,

    /// The date and time the consent was revoked
    pub revoked_at: Option<String>,

    /// The date and time the consent expires
    pub expires_at: Option<String>,
}

impl From<ConsentRecord> for ConsentResponse {
    fn from(consent: ConsentRecord) -> Self {
        ConsentResponse {
            id: consent.id,
            user_id: consent.user_id,
            organization_id: consent.organization_id,
            organization_name: consent.organization_name,
            data_types: consent.data_types,
            purpose: consent.purpose,
            status: consent.status.as_str().to_string(),
            granted_at: consent.granted_at.to_string(),
            revoked_at: consent.revoked_at.as_ref().map(ToString::to_string),
            expires_at: consent.expires_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Consent Handler
///
/// Returns a consent.
#[endpoint(tags("consents"), summary = "Get Consent")]
pub(crate) async fn handler(
    consent: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ConsentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let consent = state
        .app
        .consents
        .get_consent(&consent.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(consent.into()))
}
