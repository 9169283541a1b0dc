//! Liveness probe.

use axum::Json;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct Health {
    status: &'static str,
}

/// Always answers `{"status": "ok"}` while the process serves requests.
pub async fn handler() -> Json<Health> {
    Json(Health { status: "ok" })
}
