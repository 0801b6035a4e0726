//! Consent Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::consents::data::ConsentFilter;

use crate::{consents::get::ConsentResponse, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConsentsResponse {
    /// The list of consents, newest grant first
    pub consents: Vec<ConsentResponse>,

    /// Number of consents returned
    pub total: usize,
}

/// Consent Index Handler
///
/// Returns the user's consents.
#[endpoint(tags("consents"), summary = "List Consents")]
pub(crate) async fn handler(
    user_id: QueryParam<String, true>,
    status: QueryParam<String, false>,
    organization_id: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ConsentsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ConsentFilter {
        user_id: user_id.into_inner(),
        status: status.into_inner(),
        organization_id: organization_id.into_inner(),
    };

    let consents = state
        .app
        .consents
        .list_consents(filter)
        .await
        .or_500("failed to fetch consents")?;

    let consents: Vec<ConsentResponse> = consents.into_iter().map(Into::into).collect();

    Ok(Json(ConsentsResponse {
        total: consents.len(),
        consents,
    }))
}
