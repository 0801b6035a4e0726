//! Authentication and sessions

pub mod data;
pub mod errors;
pub mod records;
pub mod service;

pub use errors::AuthServiceError;
pub use service::*;
