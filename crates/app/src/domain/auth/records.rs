//! User Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// User Record
///
/// The password is stored in the clear because this is a demo backend; a
/// missing password marks an externally-provisioned account that accepts any
/// credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: Option<String>,
    pub profile_complete: bool,
    pub provider: String,
    pub created_at: Timestamp,
}
