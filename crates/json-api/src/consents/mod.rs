//! Consents

pub(crate) mod errors;
pub(crate) mod get;
pub(crate) mod grant;
pub(crate) mod history;
pub(crate) mod index;
pub(crate) mod revoke;
pub(crate) mod stats;
