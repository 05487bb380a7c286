#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tower::ServiceExt;

use rescue_resources_api::{
    config::AppConfig,
    db,
    dto::{CategoryPayload, ResourcePayload},
    entities::firefighter,
    services::ResourceService,
    AppState,
};

/// Helper harness for spinning up an application state backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        // Every connection to `sqlite::memory:` is its own database, so the pool holds exactly one.
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = rescue_resources_api::build_router(state.clone());

        Self { router, state }
    }

    pub fn db(&self) -> Arc<DatabaseConnection> {
        self.state.db.clone()
    }

    /// Path under the configured API prefix
    pub fn api(&self, path: &str) -> String {
        format!("{}{}", self.state.config.api_prefix, path)
    }

    /// Send a request against the router.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        self.request_with_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };
        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Firefighters are owned elsewhere, so tests insert them straight into the table.
    pub async fn insert_firefighter(&self, first_name: &str, phone: i64) -> firefighter::Model {
        firefighter::ActiveModel {
            first_name: Set(first_name.to_string()),
            paternal_surname: Set("Rojas".to_string()),
            maternal_surname: Set("Soto".to_string()),
            phone: Set(phone),
            ..Default::default()
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("failed to insert firefighter")
    }

    /// Stores a valid resource under a freshly created type and returns its id.
    pub async fn seed_resource(&self, name: &str) -> i32 {
        ResourceService::new(self.db())
            .save(ResourcePayload {
                name: Some(name.to_string()),
                quantity: Some(10),
                status: Some("Disponible".to_string()),
                resource_type: Some(CategoryPayload::named("Rescate")),
            })
            .await
            .expect("failed to seed resource")
            .id
    }
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not json")
}
