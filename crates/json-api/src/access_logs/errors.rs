//! Access Log Errors

use salvo::http::StatusError;

use trustbase_app::domain::access_logs::AccessLogsServiceError;

pub(crate) fn into_status_error(error: AccessLogsServiceError) -> StatusError {
    match error {
        AccessLogsServiceError::NotFound => StatusError::not_found().brief("Access log not found"),
    }
}
