//! Access-logs service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessLogsServiceError {
    #[error("access log not found")]
    NotFound,
}
