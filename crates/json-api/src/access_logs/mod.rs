//! Access Logs

pub(crate) mod errors;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod simulate;
pub(crate) mod stats;
