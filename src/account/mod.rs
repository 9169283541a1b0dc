mod repository;
mod service;

pub use repository::*;
pub use service::*;

use serde::{Deserialize, Serialize};

/// Account as saved on database.
///
/// `password_hash` and `refresh_token` are never serialized outward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(skip)]
    pub password_hash: String,
    pub display_image: String,
    #[serde(skip)]
    pub refresh_token: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Fields allowed to be patched on an [`Account`].
///
/// Only `username` is honored for now; unknown JSON fields are ignored by
/// the deserializer rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProfilePatch {
    pub username: Option<String>,
}
