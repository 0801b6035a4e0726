//! Organization Records

use serde::{Deserialize, Serialize};

/// Name and logo shown when a referenced organization no longer exists.
pub const UNKNOWN_ORGANIZATION_NAME: &str = "Unknown Organization";
pub const UNKNOWN_ORGANIZATION_LOGO: &str = "business";

/// Category label for organizations seeded without one.
pub const UNCATEGORIZED: &str = "Other";

/// Organization Record
///
/// Seed data only; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    pub id: String,
    pub name: String,
    pub logo: String,
    /// Reputation value in the 0-10 range.
    pub trust_score: f64,
    pub consent_active: bool,
    pub data_types: Vec<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl OrganizationRecord {
    /// The category label, substituting [`UNCATEGORIZED`] when absent.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}
