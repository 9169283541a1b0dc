use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::account::AccountService;
use crate::error::Result;
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(email(message = "Email must be formatted."))]
    email: String,
    #[validate(length(min = 1, message = "Password must not be empty."))]
    password: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub user_id: i64,
}

/// Handler to verify credentials.
///
/// No session or token is issued; the caller only learns the account id.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<Json<Response>> {
    let user_id =
        AccountService::new(state.db.postgres.clone(), state.crypto.clone())
            .verify_login(&body.email, &body.password)
            .await?;

    Ok(Json(Response {
        message: "login ok".to_owned(),
        user_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use crate::router::users::signup::tests::signup;
    use crate::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;
    use sqlx::{Pool, Postgres};

    async fn login(
        app: Router,
        email: &str,
        password: &str,
    ) -> axum::http::Response<axum::body::Body> {
        let body = json!({ "email": email, "password": password });
        make_request(app, Method::POST, "/users/login", body.to_string())
            .await
    }

    #[sqlx::test]
    async fn test_login_handler(pool: Pool<Postgres>) {
        let state = router::state(pool);

        let response =
            signup(app(state.clone()), "a@x.com", "alice", "pw1").await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body =
            response.into_body().collect().await.unwrap().to_bytes();
        let created: Account = serde_json::from_slice(&body).unwrap();

        let response = login(app(state), "a@x.com", "pw1").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body =
            response.into_body().collect().await.unwrap().to_bytes();
        let body: Response = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.message, "login ok");
        assert_eq!(body.user_id, created.id);
    }

    #[sqlx::test]
    async fn test_login_is_indistinguishable(pool: Pool<Postgres>) {
        let state = router::state(pool);

        let response =
            signup(app(state.clone()), "a@x.com", "alice", "pw1").await;
        assert_eq!(response.status(), StatusCode::CREATED);

        // Unknown email and wrong password answer the same way.
        let unknown = login(app(state.clone()), "nobody@x.com", "pw1").await;
        let wrong = login(app(state), "a@x.com", "wrong").await;

        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

        let unknown =
            unknown.into_body().collect().await.unwrap().to_bytes();
        let wrong = wrong.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(unknown, wrong);
    }
}
