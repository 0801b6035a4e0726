//! Access Logs

pub mod data;
pub mod errors;
pub mod records;
pub mod service;

pub use errors::AccessLogsServiceError;
pub use service::*;
