//! Update account data.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::account::{Account, AccountService, ProfilePatch};
use crate::error::Result;
use crate::router::Valid;

/// Only `username` may be patched for now. Unknown fields in the payload
/// are ignored, not rejected.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Username must be 1 to 50 characters long."
    ))]
    username: Option<String>,
}

pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Valid(body): Valid<Body>,
) -> Result<Json<Account>> {
    let account =
        AccountService::new(state.db.postgres.clone(), state.crypto.clone())
            .update_profile(
                user_id,
                ProfilePatch {
                    username: body.username,
                },
            )
            .await?;

    Ok(Json(account))
}
