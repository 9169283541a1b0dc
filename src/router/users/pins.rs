//! Pins owned by an account.

use axum::Json;
use axum::extract::{Path, State};

use crate::AppState;
use crate::account::AccountService;
use crate::error::Result;

/// Always answers 501: pin relations are not modeled yet.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<serde_json::Value>>> {
    let pins =
        AccountService::new(state.db.postgres.clone(), state.crypto.clone())
            .list_pins_for_account(user_id)
            .await?;

    Ok(Json(pins))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sqlx::{Pool, Postgres};

    use crate::*;

    #[sqlx::test]
    async fn test_pins_not_implemented(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state);

        let response = make_request(
            app,
            Method::GET,
            "/users/1/pins",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
