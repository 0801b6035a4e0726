//! Auth service: demo login policy plus the session registry.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    domain::auth::{
        data::{AuthSession, Credentials},
        errors::AuthServiceError,
        records::UserRecord,
    },
    ids::IdSource,
    store::Store,
};

/// Minimum password length the demo policy accepts for unknown accounts.
const MIN_PASSWORD_LEN: usize = 6;

const TOKEN_PREFIX: &str = "demo_token";
const USER_PREFIX: &str = "demo_user";

/// In-memory auth service over the shared store.
#[derive(Clone)]
pub struct MemAuthService {
    store: Arc<Store>,
    ids: Arc<dyn IdSource>,
}

impl MemAuthService {
    #[must_use]
    pub fn new(store: Arc<Store>, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }

    /// Record a fresh session token for the user.
    async fn issue_token(&self, user_id: &str) -> String {
        let token = self.ids.generate(TOKEN_PREFIX);

        self.store
            .sessions
            .write()
            .await
            .insert(token.clone(), user_id.to_string());

        token
    }

    /// Demo account rule: a missing password accepts anything, otherwise an
    /// exact match or any password of at least [`MIN_PASSWORD_LEN`] passes.
    fn demo_account_accepts(user: &UserRecord, password: &str) -> bool {
        match &user.password {
            None => true,
            Some(stored) => stored == password || password.len() >= MIN_PASSWORD_LEN,
        }
    }

    /// Register an unknown email as a fresh demo account, deriving names
    /// from the address local part.
    async fn register_demo_user(&self, credentials: Credentials) -> UserRecord {
        let (first_name, last_name) = names_from_email(&credentials.email);

        let user = UserRecord {
            id: self.ids.generate(USER_PREFIX),
            email: credentials.email,
            first_name,
            last_name,
            password: Some(credentials.password),
            profile_complete: false,
            provider: "email".to_string(),
            created_at: Timestamp::now(),
        };

        self.store.users.write().await.push(user.clone());

        user
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn names_from_email(email: &str) -> (String, String) {
    let local = email.split('@').next().unwrap_or_default();
    let mut parts = local.split('.');

    let first = parts
        .next()
        .filter(|part| !part.is_empty())
        .map_or_else(|| "User".to_string(), capitalize);
    let last = parts
        .next()
        .filter(|part| !part.is_empty())
        .map_or_else(|| "Demo".to_string(), capitalize);

    (first, last)
}

#[async_trait]
impl AuthService for MemAuthService {
    async fn login(&self, credentials: Credentials) -> Result<AuthSession, AuthServiceError> {
        let known = {
            let users = self.store.users.read().await;

            users
                .iter()
                .find(|user| user.email == credentials.email)
                .cloned()
        };

        if let Some(user) = known {
            if Self::demo_account_accepts(&user, &credentials.password) {
                let token = self.issue_token(&user.id).await;

                info!(user = %user.id, "login");

                return Ok(AuthSession { token, user });
            }

            return Err(AuthServiceError::InvalidCredentials);
        }

        if credentials.email.contains('@') && credentials.password.len() >= MIN_PASSWORD_LEN {
            let user = self.register_demo_user(credentials).await;
            let token = self.issue_token(&user.id).await;

            info!(user = %user.id, "registered demo account");

            return Ok(AuthSession { token, user });
        }

        Err(AuthServiceError::InvalidCredentials)
    }

    async fn session_user(&self, token: &str) -> Result<UserRecord, AuthServiceError> {
        let user_id = self
            .store
            .sessions
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(AuthServiceError::InvalidToken)?;

        self.store
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or(AuthServiceError::UserNotFound)
    }

    async fn logout(&self, token: &str) -> Result<(), AuthServiceError> {
        // Idempotent: revoking an absent token is not an error.
        self.store.sessions.write().await.remove(token);

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate with the demo policy and issue a session token.
    async fn login(&self, credentials: Credentials) -> Result<AuthSession, AuthServiceError>;

    /// Resolve a session token to its user profile.
    async fn session_user(&self, token: &str) -> Result<UserRecord, AuthServiceError>;

    /// Revoke a session token; revoking an unknown token succeeds.
    async fn logout(&self, token: &str) -> Result<(), AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{ids::UuidIdSource, seed::SeedData};

    use super::*;

    fn demo_service() -> MemAuthService {
        MemAuthService::new(
            Arc::new(Store::from_seed(SeedData::demo())),
            Arc::new(UuidIdSource),
        )
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn demo_account_logs_in_with_exact_short_password() -> TestResult {
        let session = demo_service()
            .login(credentials("demo@trustbase.ng", "demo123"))
            .await?;

        assert_eq!(session.user.id, "demo_user_1");

        Ok(())
    }

    #[tokio::test]
    async fn demo_account_accepts_any_long_password() -> TestResult {
        let session = demo_service()
            .login(credentials("demo@trustbase.ng", "some other password"))
            .await?;

        assert_eq!(session.user.id, "demo_user_1");

        Ok(())
    }

    #[tokio::test]
    async fn demo_account_rejects_short_wrong_password() {
        let result = demo_service()
            .login(credentials("demo@trustbase.ng", "nope"))
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn passwordless_account_accepts_anything() -> TestResult {
        let session = demo_service()
            .login(credentials("adaora.okafor@gmail.com", "x"))
            .await?;

        assert_eq!(session.user.id, "demo_google_user");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_email_registers_a_demo_account() -> TestResult {
        let service = demo_service();

        let session = service
            .login(credentials("chidi.eze@example.com", "longenough"))
            .await?;

        assert_eq!(session.user.first_name, "Chidi");
        assert_eq!(session.user.last_name, "Eze");
        assert_eq!(session.user.provider, "email");

        // Registered users can log in again.
        let again = service
            .login(credentials("chidi.eze@example.com", "longenough"))
            .await?;

        assert_eq!(again.user.id, session.user.id);

        Ok(())
    }

    #[tokio::test]
    async fn email_without_dot_gets_default_last_name() -> TestResult {
        let session = demo_service()
            .login(credentials("ngozi@example.com", "longenough"))
            .await?;

        assert_eq!(session.user.first_name, "Ngozi");
        assert_eq!(session.user.last_name, "Demo");

        Ok(())
    }

    #[tokio::test]
    async fn short_password_for_unknown_email_fails() {
        let result = demo_service()
            .login(credentials("new@example.com", "tiny"))
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn email_without_at_sign_fails() {
        let result = demo_service()
            .login(credentials("not-an-email", "longenough"))
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn session_lifecycle_issue_lookup_revoke() -> TestResult {
        let service = demo_service();

        let session = service
            .login(credentials("demo@trustbase.ng", "demo123"))
            .await?;

        let user = service.session_user(&session.token).await?;
        assert_eq!(user.id, session.user.id);

        service.logout(&session.token).await?;

        let result = service.session_user(&session.token).await;
        assert!(
            matches!(result, Err(AuthServiceError::InvalidToken)),
            "expected InvalidToken after logout, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn seeded_token_resolves_to_demo_user() -> TestResult {
        let user = demo_service().session_user("demo_token_123").await?;

        assert_eq!(user.id, "demo_user_1");

        Ok(())
    }

    #[tokio::test]
    async fn logout_is_idempotent() -> TestResult {
        let service = demo_service();

        service.logout("demo_token_123").await?;
        service.logout("demo_token_123").await?;
        service.logout("never_issued").await?;

        Ok(())
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("ADAORA"), "Adaora");
        assert_eq!(capitalize("okafor"), "Okafor");
        assert_eq!(capitalize(""), "");
    }
}
