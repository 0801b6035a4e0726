//! Voice response adapter

pub mod classify;
pub mod data;
pub mod responses;
pub mod service;

pub use classify::ResponseCategory;
pub use service::*;
