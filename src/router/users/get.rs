//! Get account data.

use axum::Json;
use axum::extract::{Path, State};

use crate::AppState;
use crate::account::{Account, AccountService};
use crate::error::Result;

pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Account>> {
    let account =
        AccountService::new(state.db.postgres.clone(), state.crypto.clone())
            .get_profile(user_id)
            .await?;

    Ok(Json(account))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use sqlx::{Pool, Postgres};

    use super::*;
    use crate::router::users::signup::tests::signup;
    use crate::*;

    #[sqlx::test]
    async fn test_get_user_handler(pool: Pool<Postgres>) {
        let state = router::state(pool);

        let response =
            signup(app(state.clone()), "a@x.com", "alice", "pw1").await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body =
            response.into_body().collect().await.unwrap().to_bytes();
        let created: Account = serde_json::from_slice(&body).unwrap();

        let path = format!("/users/{}", created.id);
        let response =
            make_request(app(state), Method::GET, &path, String::default())
                .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body =
            response.into_body().collect().await.unwrap().to_bytes();
        let raw = String::from_utf8(body.to_vec()).unwrap();
        assert!(!raw.contains("password"));
        assert!(!raw.contains("refresh_token"));

        let body: Account = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.id, created.id);
        assert_eq!(body.email, "a@x.com");
        assert_eq!(body.username, "alice");
    }

    #[sqlx::test]
    async fn test_get_unknown_user(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state);

        let response =
            make_request(app, Method::GET, "/users/404", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
