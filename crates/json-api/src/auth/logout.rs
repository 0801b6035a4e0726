//! Logout Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{auth::session_check::SessionCheckRequest, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LogoutResponse {
    /// Always true; revoking an unknown token still succeeds
    pub success: bool,

    /// Human-readable outcome
    pub message: String,
}

/// Logout Handler
///
/// Revokes a session token. Idempotent.
#[endpoint(tags("auth"), summary = "Logout")]
pub(crate) async fn handler(
    body: JsonBody<SessionCheckRequest>,
    depot: &mut Depot,
) -> Result<Json<LogoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .auth
        .logout(&body.into_inner().token)
        .await
        .or_500("failed to revoke session token")?;

    Ok(Json(LogoutResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    }))
}
