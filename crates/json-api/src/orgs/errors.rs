//! Organization Errors

use salvo::http::StatusError;

use trustbase_app::domain::organizations::OrgsServiceError;

pub(crate) fn into_status_error(error: OrgsServiceError) -> StatusError {
    match error {
        OrgsServiceError::NotFound => StatusError::not_found().brief("Organization not found"),
    }
}
