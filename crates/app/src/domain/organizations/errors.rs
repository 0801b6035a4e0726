//! Organizations service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrgsServiceError {
    #[error("organization not found")]
    NotFound,
}
