//! Session Check Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{errors::into_status_error, login::UserProfileResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionCheckRequest {
    /// The session token to validate
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionCheckResponse {
    /// Whether the token resolved to a user
    pub success: bool,

    /// The session user's profile
    pub user: UserProfileResponse,
}

/// Session Check Handler
///
/// Resolves a session token to its user profile.
#[endpoint(tags("auth"), summary = "Session Check")]
pub(crate) async fn handler(
    body: JsonBody<SessionCheckRequest>,
    depot: &mut Depot,
) -> Result<Json<SessionCheckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .auth
        .session_user(&body.into_inner().token)
        .await
        .map_err(into_status_error)?;

    Ok(Json(SessionCheckResponse {
        success: true,
        user: user.into(),
    }))
}
