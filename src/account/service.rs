use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::account::{Account, AccountRepository, ProfilePatch};
use crate::crypto::PasswordManager;
use crate::error::{Result, ServerError};

/// Account manager.
///
/// Stateless between calls: all state lives in the repository.
#[derive(Clone)]
pub struct AccountService {
    pub repo: AccountRepository,
    pub crypto: Arc<PasswordManager>,
}

impl AccountService {
    /// Create a new [`AccountService`].
    pub fn new(pool: Pool<Postgres>, crypto: Arc<PasswordManager>) -> Self {
        Self {
            repo: AccountRepository::new(pool),
            crypto,
        }
    }

    /// Create an account with unique email and username.
    ///
    /// The probe before the insert only produces a clean conflict error;
    /// the storage constraint remains the authoritative guard against
    /// concurrent duplicates.
    pub async fn create_account(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<Account> {
        if self.repo.find_conflicting(email, username).await?.is_some() {
            return Err(ServerError::Conflict);
        }

        let password_hash = self.crypto.hash_password(password)?;
        let account =
            self.repo.insert(email, username, &password_hash).await?;

        tracing::info!(account_id = account.id, "account created");
        Ok(account)
    }

    /// Verify credentials and return the account id.
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller.
    pub async fn verify_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<i64> {
        let account = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(ServerError::Unauthorized)?;

        if !self.crypto.verify_password(password, &account.password_hash) {
            return Err(ServerError::Unauthorized);
        }

        Ok(account.id)
    }

    /// Fetch an account by id.
    pub async fn get_profile(&self, account_id: i64) -> Result<Account> {
        self.repo
            .get(account_id)
            .await?
            .ok_or(ServerError::NotFound)
    }

    /// Apply a [`ProfilePatch`] and return the updated account.
    ///
    /// `updated_at` is bumped by the storage layer.
    pub async fn update_profile(
        &self,
        account_id: i64,
        patch: ProfilePatch,
    ) -> Result<Account> {
        let mut account = self.get_profile(account_id).await?;

        if let Some(username) = patch.username {
            account.username = username;
        }

        self.repo.update(&account).await
    }

    /// Pin relations are not modeled yet.
    pub async fn list_pins_for_account(
        &self,
        _account_id: i64,
    ) -> Result<Vec<serde_json::Value>> {
        Err(ServerError::Unimplemented)
    }
}
