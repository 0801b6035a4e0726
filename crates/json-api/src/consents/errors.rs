//! Consent Errors

use salvo::http::StatusError;

use trustbase_app::domain::consents::ConsentsServiceError;

pub(crate) fn into_status_error(error: ConsentsServiceError) -> StatusError {
    match error {
        ConsentsServiceError::NotFound => StatusError::not_found().brief("Consent not found"),
        ConsentsServiceError::NoActiveConsent => {
            StatusError::not_found().brief("Active consent not found")
        }
    }
}
