//! Auth Data

use crate::domain::auth::records::UserRecord;

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// An issued session: the opaque token plus the authenticated user.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: UserRecord,
}
