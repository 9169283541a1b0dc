//! Users-related HTTP API.
mod get;
pub mod login;
mod pins;
pub mod signup;
mod update;

use axum::Router;
use axum::routing::{get, post};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `POST /users/signup` goes to `signup`.
        .route("/signup", post(signup::handler))
        // `POST /users/login` goes to `login`.
        .route("/login", post(login::handler))
        // `GET /users/:ID` goes to `get`, `PUT /users/:ID` to `update`.
        .route("/{user_id}", get(get::handler).put(update::handler))
        // `GET /users/:ID/pins` is not built yet.
        .route("/{user_id}/pins", get(pins::handler))
}
