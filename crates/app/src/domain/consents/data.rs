//! Consents Data

/// New Consent Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsent {
    pub user_id: String,
    pub organization_id: String,
    pub data_types: Vec<String>,
    pub purpose: String,
}

/// Consent Revocation Data
///
/// Targets the single active consent for the (user, organization) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentRevocation {
    pub user_id: String,
    pub organization_id: String,
    pub reason: Option<String>,
}

/// Consent list filter. The owning user is always required; a status filter
/// compares against the textual status, so an unknown status simply matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentFilter {
    pub user_id: String,
    pub status: Option<String>,
    pub organization_id: Option<String>,
}

/// Per-user consent counts.
///
/// `expired` is derived as `total - active - revoked`; the core never writes
/// an expired status, so the derivation only surfaces records seeded with
/// one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsentStats {
    pub total: usize,
    pub active: usize,
    pub revoked: usize,
    pub expired: usize,
    /// Distinct organizations holding any consent from the user.
    pub organizations: usize,
}
