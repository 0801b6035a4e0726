//! TrustBase Domain Concerns

pub mod access_logs;
pub mod auth;
pub mod consents;
pub mod organizations;
pub mod voice;
