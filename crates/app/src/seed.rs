//! Seed data.
//!
//! Initial store contents are injected at construction time, either parsed
//! from an external JSON file or taken from the built-in demo dataset. Demo
//! timestamps are generated relative to startup so the default look-back
//! windows keep returning records.

use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::domain::{
    access_logs::records::{AccessLogRecord, AccessStatus},
    auth::records::UserRecord,
    consents::records::{ConsentAction, ConsentHistoryRecord, ConsentRecord, ConsentStatus},
    organizations::records::OrganizationRecord,
};

/// Initial contents for every collection. Missing sections of a seed file
/// leave the matching collection empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub organizations: Vec<OrganizationRecord>,
    pub consents: Vec<ConsentRecord>,
    pub consent_history: Vec<ConsentHistoryRecord>,
    pub access_logs: Vec<AccessLogRecord>,
    pub users: Vec<UserRecord>,
    /// Pre-issued session tokens, token -> user id.
    pub tokens: FxHashMap<String, String>,
}

fn hours_ago(hours: i64) -> Timestamp {
    Timestamp::now()
        .saturating_sub(SignedDuration::from_hours(hours))
        .expect("absolute-duration arithmetic is infallible")
}

fn days_ago(days: i64) -> Timestamp {
    hours_ago(days * 24)
}

fn one_year_after(at: Timestamp) -> Timestamp {
    at.saturating_add(SignedDuration::from_hours(365 * 24))
        .expect("absolute-duration arithmetic is infallible")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl SeedData {
    /// The built-in demo dataset: five organizations, four consents with
    /// their history, ten access logs and two demo accounts.
    #[must_use]
    pub fn demo() -> Self {
        let mut tokens = FxHashMap::default();
        tokens.insert("demo_token_123".to_string(), "demo_user_1".to_string());
        tokens.insert(
            "demo_google_token_456".to_string(),
            "demo_google_user".to_string(),
        );

        Self {
            organizations: demo_organizations(),
            consents: demo_consents(),
            consent_history: demo_consent_history(),
            access_logs: demo_access_logs(),
            users: demo_users(),
            tokens,
        }
    }
}

fn demo_organizations() -> Vec<OrganizationRecord> {
    let org = |id: &str,
               name: &str,
               logo: &str,
               trust_score: f64,
               consent_active: bool,
               data_types: &[&str],
               description: &str,
               category: &str| OrganizationRecord {
        id: id.to_string(),
        name: name.to_string(),
        logo: logo.to_string(),
        trust_score,
        consent_active,
        data_types: strings(data_types),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
    };

    vec![
        org(
            "org_1",
            "First Bank Nigeria",
            "account_balance",
            8.5,
            true,
            &["Personal Info", "Financial Data", "Transaction History"],
            "Leading Nigerian commercial bank providing comprehensive financial services",
            "Banking",
        ),
        org(
            "org_2",
            "MTN Nigeria",
            "phone",
            7.8,
            true,
            &["Contact Info", "Usage Data", "Location Data"],
            "Nigeria's largest telecommunications company",
            "Telecommunications",
        ),
        org(
            "org_3",
            "Jumia",
            "shopping_cart",
            7.2,
            false,
            &["Purchase History", "Preferences", "Delivery Address"],
            "Leading e-commerce platform in Nigeria",
            "E-commerce",
        ),
        org(
            "org_4",
            "Paystack",
            "payment",
            9.1,
            true,
            &["Payment Info", "Transaction Data"],
            "Modern online and offline payments for Africa",
            "Fintech",
        ),
        org(
            "org_5",
            "Flutterwave",
            "credit_card",
            8.7,
            true,
            &["Payment Info", "Merchant Data"],
            "Payment infrastructure for global merchants and payment service providers",
            "Fintech",
        ),
    ]
}

fn demo_consents() -> Vec<ConsentRecord> {
    let consent = |id: &str,
                   organization_id: &str,
                   organization_name: &str,
                   data_types: &[&str],
                   purpose: &str,
                   status: ConsentStatus,
                   granted_at: Timestamp,
                   revoked_at: Option<Timestamp>| ConsentRecord {
        id: id.to_string(),
        user_id: "demo_user_1".to_string(),
        organization_id: organization_id.to_string(),
        organization_name: organization_name.to_string(),
        data_types: strings(data_types),
        purpose: purpose.to_string(),
        status,
        granted_at,
        revoked_at,
        expires_at: Some(one_year_after(granted_at)),
    };

    vec![
        consent(
            "consent_1",
            "org_1",
            "First Bank Nigeria",
            &["Personal Info", "Financial Data", "Transaction History"],
            "Account management and loan processing",
            ConsentStatus::Active,
            days_ago(5),
            None,
        ),
        consent(
            "consent_2",
            "org_2",
            "MTN Nigeria",
            &["Contact Info", "Usage Data", "Location Data"],
            "Service optimization and billing",
            ConsentStatus::Active,
            days_ago(10),
            None,
        ),
        consent(
            "consent_3",
            "org_3",
            "Jumia",
            &["Purchase History", "Preferences", "Delivery Address"],
            "Personalized recommendations and delivery",
            ConsentStatus::Revoked,
            days_ago(15),
            Some(days_ago(2)),
        ),
        consent(
            "consent_4",
            "org_4",
            "Paystack",
            &["Payment Info", "Transaction Data"],
            "Payment processing and fraud prevention",
            ConsentStatus::Active,
            days_ago(8),
            None,
        ),
    ]
}

fn demo_consent_history() -> Vec<ConsentHistoryRecord> {
    let entry = |id: &str,
                 consent_id: &str,
                 action: ConsentAction,
                 timestamp: Timestamp,
                 data_types: &[&str],
                 reason: &str| ConsentHistoryRecord {
        id: id.to_string(),
        consent_id: consent_id.to_string(),
        action,
        timestamp,
        data_types: Some(strings(data_types)),
        reason: Some(reason.to_string()),
    };

    vec![
        entry(
            "history_1",
            "consent_1",
            ConsentAction::Granted,
            days_ago(5),
            &["Personal Info", "Financial Data", "Transaction History"],
            "Initial consent for account opening",
        ),
        entry(
            "history_2",
            "consent_3",
            ConsentAction::Revoked,
            days_ago(2),
            &["Purchase History", "Preferences", "Delivery Address"],
            "User requested data deletion",
        ),
        entry(
            "history_3",
            "consent_2",
            ConsentAction::Updated,
            days_ago(4),
            &["Contact Info", "Usage Data"],
            "Removed location data sharing",
        ),
    ]
}

fn demo_access_logs() -> Vec<AccessLogRecord> {
    let log = |id: &str,
               organization_id: &str,
               organization_name: &str,
               organization_logo: &str,
               data_type: &str,
               purpose: &str,
               timestamp: Timestamp,
               status: AccessStatus,
               ip_address: &str,
               user_agent: &str| AccessLogRecord {
        id: id.to_string(),
        user_id: "demo_user_1".to_string(),
        organization_id: organization_id.to_string(),
        organization_name: organization_name.to_string(),
        organization_logo: organization_logo.to_string(),
        data_type: data_type.to_string(),
        purpose: purpose.to_string(),
        timestamp,
        status,
        ip_address: Some(ip_address.to_string()),
        user_agent: Some(user_agent.to_string()),
    };

    vec![
        log(
            "log_1",
            "org_1",
            "First Bank Nigeria",
            "account_balance",
            "Transaction History",
            "Account verification for loan application",
            hours_ago(2),
            AccessStatus::Approved,
            "197.210.70.1",
            "FirstBank-Mobile/2.1.0",
        ),
        log(
            "log_2",
            "org_2",
            "MTN Nigeria",
            "phone",
            "Usage Data",
            "Service optimization and billing",
            hours_ago(7),
            AccessStatus::Approved,
            "41.203.64.1",
            "MyMTN-App/3.2.1",
        ),
        log(
            "log_3",
            "org_4",
            "Paystack",
            "payment",
            "Payment Information",
            "Transaction processing",
            hours_ago(26),
            AccessStatus::Approved,
            "52.31.139.75",
            "Paystack-Gateway/1.0",
        ),
        log(
            "log_4",
            "org_3",
            "Jumia",
            "shopping_cart",
            "Purchase History",
            "Personalized recommendations",
            hours_ago(31),
            AccessStatus::Denied,
            "154.113.16.1",
            "Jumia-App/4.1.2",
        ),
        log(
            "log_5",
            "org_1",
            "First Bank Nigeria",
            "account_balance",
            "Personal Information",
            "KYC compliance check",
            hours_ago(50),
            AccessStatus::Approved,
            "197.210.70.1",
            "FirstBank-Web/1.5.0",
        ),
        log(
            "log_6",
            "org_2",
            "MTN Nigeria",
            "phone",
            "Location Data",
            "Network optimization",
            hours_ago(60),
            AccessStatus::Approved,
            "41.203.64.1",
            "MTN-Network/2.0",
        ),
        log(
            "log_7",
            "org_4",
            "Paystack",
            "payment",
            "Transaction Data",
            "Fraud detection analysis",
            hours_ago(74),
            AccessStatus::Approved,
            "52.31.139.75",
            "Paystack-Security/1.2",
        ),
        log(
            "log_8",
            "org_1",
            "First Bank Nigeria",
            "account_balance",
            "Financial Data",
            "Credit score assessment",
            hours_ago(98),
            AccessStatus::Approved,
            "197.210.70.1",
            "FirstBank-Credit/1.0",
        ),
        log(
            "log_9",
            "org_2",
            "MTN Nigeria",
            "phone",
            "Contact Info",
            "Account verification",
            hours_ago(120),
            AccessStatus::Approved,
            "41.203.64.1",
            "MyMTN-App/3.2.1",
        ),
        log(
            "log_10",
            "org_3",
            "Jumia",
            "shopping_cart",
            "Delivery Address",
            "Order fulfillment",
            hours_ago(144),
            AccessStatus::Denied,
            "154.113.16.1",
            "Jumia-Logistics/2.1",
        ),
    ]
}

fn demo_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: "demo_user_1".to_string(),
            email: "demo@trustbase.ng".to_string(),
            first_name: "Adaora".to_string(),
            last_name: "Okafor".to_string(),
            password: Some("demo123".to_string()),
            profile_complete: false,
            provider: "email".to_string(),
            created_at: days_ago(30),
        },
        UserRecord {
            id: "demo_google_user".to_string(),
            email: "adaora.okafor@gmail.com".to_string(),
            first_name: "Adaora".to_string(),
            last_name: "Okafor".to_string(),
            password: None,
            profile_complete: false,
            provider: "google".to_string(),
            created_at: days_ago(30),
        },
    ]
}
