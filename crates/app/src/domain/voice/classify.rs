//! Keyword classification of voice queries.
//!
//! Rules are an ordered list evaluated in sequence; the first match wins, so
//! precedence is explicit data rather than implicit code order.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Canned-response category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    BankingData,
    TelecomData,
    ExplainAccess,
    ConsentRights,
    Default,
}

impl ResponseCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BankingData => "banking_data",
            Self::TelecomData => "telecom_data",
            Self::ExplainAccess => "explain_access",
            Self::ConsentRights => "consent_rights",
            Self::Default => "default",
        }
    }
}

impl Display for ResponseCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Keywords forming the "explain/why/access" umbrella.
const EXPLAIN_KEYWORDS: &[&str] = &["explain", "why", "access", "purpose", "first bank", "bank"];

const BANKING_KEYWORDS: &[&str] = &["bank", "first bank", "financial", "loan", "transaction"];

const TELECOM_KEYWORDS: &[&str] = &["mtn", "telecom", "phone", "network", "usage"];

const RIGHTS_KEYWORDS: &[&str] = &["rights", "consent", "withdraw", "delete", "revoke"];

struct Rule {
    category: ResponseCategory,
    matches: fn(&str) -> bool,
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn is_banking(text: &str) -> bool {
    contains_any(text, EXPLAIN_KEYWORDS) && contains_any(text, BANKING_KEYWORDS)
}

fn is_telecom(text: &str) -> bool {
    contains_any(text, EXPLAIN_KEYWORDS) && contains_any(text, TELECOM_KEYWORDS)
}

fn is_explain_access(text: &str) -> bool {
    contains_any(text, EXPLAIN_KEYWORDS)
}

fn is_consent_rights(text: &str) -> bool {
    contains_any(text, RIGHTS_KEYWORDS)
}

/// Evaluated top to bottom; banking and telecom take precedence under the
/// explain umbrella.
const RULES: &[Rule] = &[
    Rule { category: ResponseCategory::BankingData, matches: is_banking },
    Rule { category: ResponseCategory::TelecomData, matches: is_telecom },
    Rule { category: ResponseCategory::ExplainAccess, matches: is_explain_access },
    Rule { category: ResponseCategory::ConsentRights, matches: is_consent_rights },
];

/// Classify free text into a response category (case-insensitive).
#[must_use]
pub fn classify(text: &str) -> ResponseCategory {
    let text = text.to_lowercase();

    RULES
        .iter()
        .find(|rule| (rule.matches)(&text))
        .map_or(ResponseCategory::Default, |rule| rule.category)
}
