//! Consents service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsentsServiceError {
    #[error("consent not found")]
    NotFound,

    #[error("no active consent for the user and organization")]
    NoActiveConsent,
}
