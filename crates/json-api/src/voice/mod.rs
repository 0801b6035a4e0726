//! Voice

pub(crate) mod languages;
pub(crate) mod prompts;
pub(crate) mod query;
