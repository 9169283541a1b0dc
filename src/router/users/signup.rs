use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::account::{Account, AccountService};
use crate::error::Result;
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(email(message = "Email must be formatted."))]
    email: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "Username must be 1 to 50 characters long."
    ))]
    username: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Password must not be empty."
    ))]
    password: String,
}

/// Handler to create an account.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Account>)> {
    let account =
        AccountService::new(state.db.postgres.clone(), state.crypto.clone())
            .create_account(&body.email, &body.username, &body.password)
            .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;
    use sqlx::{Pool, Postgres};

    pub async fn signup(
        app: Router,
        email: &str,
        username: &str,
        password: &str,
    ) -> axum::http::Response<axum::body::Body> {
        let body = json!({
            "email": email,
            "username": username,
            "password": password,
        });
        make_request(app, Method::POST, "/users/signup", body.to_string())
            .await
    }

    #[sqlx::test]
    async fn test_signup_handler(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state);

        let response = signup(app, "a@x.com", "alice", "pw1").await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let raw = String::from_utf8(body.to_vec()).unwrap();
        assert!(!raw.contains("password"));
        assert!(!raw.contains("refresh_token"));

        let body: Account = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.email, "a@x.com");
        assert_eq!(body.username, "alice");
        assert!(body.id >= 1);
    }

    #[sqlx::test]
    async fn test_signup_duplicate_email(pool: Pool<Postgres>) {
        let state = router::state(pool);

        let response =
            signup(app(state.clone()), "a@x.com", "alice", "pw1").await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = signup(app(state), "a@x.com", "bob", "pw2").await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[sqlx::test]
    async fn test_signup_duplicate_username(pool: Pool<Postgres>) {
        let state = router::state(pool);

        let response =
            signup(app(state.clone()), "a@x.com", "alice", "pw1").await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = signup(app(state), "b@x.com", "alice", "pw2").await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[sqlx::test]
    async fn test_signup_invalid_email(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state);

        let response = signup(app, "not-an-email", "alice", "pw1").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
