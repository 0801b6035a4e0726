//! Organizations

pub(crate) mod categories;
pub(crate) mod errors;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod trust_scores;
