//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::auth::{data::Credentials, records::UserRecord};

use crate::{auth::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserProfileResponse {
    /// The unique identifier of the user
    pub id: String,

    /// The user's email address
    pub email: String,

    /// The user's first name
    pub first_name: String,

    /// The user's last name
    pub last_name: String,

    /// Whether the profile has been completed
    pub profile_complete: bool,

    /// Authentication provider (email, google)
    pub provider: String,

    /// The date and time the account was created
    pub created_at: String,
}

impl From<UserRecord> for UserProfileResponse {
    fn from(user: UserRecord) -> Self {
        UserProfileResponse {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_complete: user.profile_complete,
            provider: user.provider,
            created_at: user.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    /// The user's email address
    pub email: String,

    /// The user's password
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// Whether the login succeeded
    pub success: bool,

    /// Opaque session token
    pub token: String,

    /// The authenticated user's profile
    pub user: UserProfileResponse,

    /// Human-readable outcome
    pub message: String,
}

/// Login Handler
///
/// Authenticates with the demo policy and issues a session token.
#[endpoint(tags("auth"), summary = "Login")]
pub(crate) async fn handler(
    body: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = body.into_inner();

    let session = state
        .app
        .auth
        .login(Credentials {
            email: request.email,
            password: request.password,
        })
        .await
        .map_err(into_status_error)?;

    Ok(Json(LoginResponse {
        success: true,
        token: session.token,
        user: session.user.into(),
        message: "Login successful".to_string(),
    }))
}
