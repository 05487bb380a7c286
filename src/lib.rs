//! Rescue Resources API Library
//!
//! Equipment, vehicles and their categories for a fire brigade, plus the
//! resource requests filed by firefighters.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::Router;
use http::HeaderValue;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{
    categories::category_routes, resource_requests::resource_request_routes,
    resources::resource_routes, vehicles::vehicle_routes, AppServices,
};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        Self {
            services: AppServices::new(db.clone()),
            db,
            config,
        }
    }
}

/// Resource collections, relative to the API prefix
pub fn api_routes(services: &AppServices) -> Router<AppState> {
    Router::new()
        .nest("/recursos", resource_routes())
        .nest("/vehiculos", vehicle_routes())
        .nest("/solicitudes-recursos", resource_request_routes())
        .nest(
            "/tipos-recursos",
            category_routes(services.resource_types.clone()),
        )
        .nest(
            "/tipos-vehiculos",
            category_routes(services.vehicle_types.clone()),
        )
}

/// CORS policy derived from configuration.
///
/// Explicit origins win; otherwise development (or an explicit override) is
/// permissive and everything else gets a same-origin only layer.
pub fn cors_layer(cfg: &config::AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else if cfg.should_allow_permissive_cors() {
        ::tracing::info!(
            environment = %cfg.environment,
            "Using permissive CORS because explicit origins were not configured"
        );
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}

/// Full application router: health, the prefixed API and the shared middleware stack
pub fn build_router(state: AppState) -> Router {
    let prefix = state.config.api_prefix.clone();
    let cors = cors_layer(&state.config);
    let db = state.db.clone();

    Router::new()
        .nest(&prefix, api_routes(&state.services))
        .with_state(state)
        .merge(health::health_routes(db))
        // HTTP tracing layer for consistent request/response telemetry
        .layer(tracing::configure_http_tracing())
        .layer(cors)
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
}
