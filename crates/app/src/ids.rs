//! Identifier generation.

use uuid::Uuid;

/// Source of new collection identifiers and session tokens.
///
/// Identifiers are short prefixed strings (`consent_1a2b3c4d`). Uniqueness is
/// best-effort; the demo store never holds enough records for the truncated
/// random suffix to matter. Swapping in a collision-free generator only
/// requires a new implementation of this trait.
pub trait IdSource: Send + Sync {
    /// Produce a fresh identifier with the given prefix.
    fn generate(&self, prefix: &str) -> String;
}

/// Random identifiers from a truncated UUID v4 hex encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn generate(&self, prefix: &str) -> String {
        let mut hex = Uuid::new_v4().simple().to_string();
        hex.truncate(8);

        format!("{prefix}_{hex}")
    }
}
