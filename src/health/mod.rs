//! Liveness endpoint reporting database reachability.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub database: HealthStatus,
}

/// `GET /health`: 200 while the database answers a ping, 503 otherwise
pub async fn health_check(State(db): State<Arc<DatabaseConnection>>) -> impl IntoResponse {
    let database = match crate::db::check_connection(&db).await {
        Ok(()) => HealthStatus::Up,
        Err(e) => {
            error!("Database health check failed: {}", e);
            HealthStatus::Down
        }
    };

    let status_code = match database {
        HealthStatus::Up => StatusCode::OK,
        HealthStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status_code,
        Json(HealthReport {
            status: database,
            database,
        }),
    )
}

pub fn health_routes(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(db)
}
