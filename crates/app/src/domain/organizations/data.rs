//! Organizations Data

/// Organization list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgFilter {
    /// Keep only organizations in this category.
    pub category: Option<String>,

    /// Keep only organizations with an active consent flag.
    pub active_only: bool,
}
