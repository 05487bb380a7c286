use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::common::{confirmation, created_response, list_response, success_response, JsonBody};
use crate::dto::ResourcePayload;
use crate::errors::ServiceError;
use crate::AppState;

pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_resources).post(create_resource))
        .route(
            "/:id",
            get(get_resource).put(update_resource).delete(delete_resource),
        )
        .route(
            "/:id/asignar-tipo-recurso/:resource_type_id",
            post(assign_resource_type),
        )
}

pub async fn list_resources(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    Ok(list_response(state.services.resources.find_all().await?))
}

pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(success_response(
        state.services.resources.find_by_id(id).await?,
    ))
}

pub async fn create_resource(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ResourcePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.resources.save(payload).await?;
    Ok(created_response("Recurso creado con éxito."))
}

pub async fn update_resource(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<ResourcePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.resources.update(id, payload).await?;
    Ok(confirmation(StatusCode::OK, "Actualizado con éxito"))
}

pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.resources.delete(id).await?;
    Ok(confirmation(StatusCode::OK, "Recurso eliminado con éxito."))
}

pub async fn assign_resource_type(
    State(state): State<AppState>,
    Path((id, resource_type_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .resources
        .assign_resource_type(id, resource_type_id)
        .await?;
    Ok(confirmation(
        StatusCode::OK,
        "Tipo Recurso asignado al Recurso exitosamente",
    ))
}
