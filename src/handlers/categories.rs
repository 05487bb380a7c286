use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;

use super::common::{confirmation, created_response, list_response, success_response, JsonBody};
use crate::dto::CategoryPayload;
use crate::errors::ServiceError;
use crate::services::CategoryStore;

type Store = Arc<dyn CategoryStore>;

/// CRUD routes for one category table, mounted by the caller under its collection path
pub fn category_routes<S>(store: Store) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .with_state(store)
}

pub async fn list_categories(State(store): State<Store>) -> Result<impl IntoResponse, ServiceError> {
    Ok(list_response(store.find_all().await?))
}

pub async fn get_category(
    State(store): State<Store>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(success_response(store.find_by_id(id).await?))
}

pub async fn create_category(
    State(store): State<Store>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    store.save(payload).await?;
    Ok(created_response(format!("{} creado con éxito.", store.label())))
}

pub async fn update_category(
    State(store): State<Store>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    store.update(id, payload).await?;
    Ok(confirmation(StatusCode::OK, "Actualizado con éxito"))
}

pub async fn delete_category(
    State(store): State<Store>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    store.delete(id).await?;
    Ok(confirmation(
        StatusCode::OK,
        format!("{} eliminado con éxito.", store.label()),
    ))
}
