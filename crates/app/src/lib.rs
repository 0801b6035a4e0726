//! Shared application domain and in-memory storage modules.

pub mod aggregate;
pub mod context;
pub mod domain;
pub mod ids;
pub mod query;
pub mod seed;
pub mod store;
