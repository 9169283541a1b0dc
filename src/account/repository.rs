//! Handle database requests.

use sqlx::{Pool, Postgres};

use crate::account::Account;
use crate::error::{Result, ServerError};

/// SQLSTATE for a unique constraint violation on PostgreSQL.
const UNIQUE_VIOLATION: &str = "23505";

const ACCOUNT_COLUMNS: &str = "id, email, username, password_hash, \
     display_image, refresh_token, created_at, updated_at";

#[derive(Clone)]
pub struct AccountRepository {
    pool: Pool<Postgres>,
}

impl AccountRepository {
    /// Create a new [`AccountRepository`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new account; the database assigns `id` and timestamps.
    ///
    /// The `UNIQUE` constraints on `email` and `username` are the
    /// authoritative uniqueness guard: a violation maps to
    /// [`ServerError::Conflict`] even when the pre-insert probe missed a
    /// concurrent duplicate.
    pub async fn insert(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<Account> {
        let query = format!(
            r#"INSERT INTO users (email, username, password_hash)
                VALUES ($1, $2, $3)
                RETURNING {ACCOUNT_COLUMNS}"#
        );

        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .bind(username)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(conflict_on_unique_violation)
    }

    /// Find an account using its `id` field.
    pub async fn get(&self, account_id: i64) -> Result<Option<Account>> {
        let query = get_by_field_query(Field::Id);

        let account = sqlx::query_as::<_, Account>(&query)
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    /// Find an account using its `email` field.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let query = get_by_field_query(Field::Email);

        let account = sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    /// Find any account colliding with the given `email` OR `username`.
    ///
    /// Optimistic probe only, used to produce a clean conflict message
    /// before attempting the insert.
    pub async fn find_conflicting(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<Account>> {
        let query = format!(
            r#"SELECT {ACCOUNT_COLUMNS} FROM users
                WHERE email = $1 OR username = $2"#
        );

        let account = sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    /// Update the mutable fields of an account and bump `updated_at`.
    pub async fn update(&self, account: &Account) -> Result<Account> {
        let query = format!(
            r#"UPDATE users
                SET username = $1, updated_at = NOW()
                WHERE id = $2
                RETURNING {ACCOUNT_COLUMNS}"#
        );

        sqlx::query_as::<_, Account>(&query)
            .bind(&account.username)
            .bind(account.id)
            .fetch_one(&self.pool)
            .await
            .map_err(conflict_on_unique_violation)
    }
}

fn conflict_on_unique_violation(err: sqlx::Error) -> ServerError {
    let is_unique_violation = err
        .as_database_error()
        .and_then(|e| e.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION);

    if is_unique_violation {
        ServerError::Conflict
    } else {
        err.into()
    }
}

#[derive(Debug, Clone)]
enum Field {
    Id,
    Email,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Field::Id => write!(f, "id"),
            Field::Email => write!(f, "email"),
        }
    }
}

fn get_by_field_query(field: Field) -> String {
    format!(r#"SELECT {ACCOUNT_COLUMNS} FROM users WHERE {field} = $1"#)
}
