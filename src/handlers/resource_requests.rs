use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::common::{confirmation, created_response, list_response, success_response, JsonBody};
use crate::dto::ResourceRequestPayload;
use crate::errors::ServiceError;
use crate::AppState;

pub fn resource_request_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests).post(create_request))
        .route(
            "/:id",
            get(get_request).put(update_request).delete(delete_request),
        )
        .route("/:id/asignar-recurso/:resource_id", post(assign_resource))
        .route(
            "/:id/asignar-bombero/:firefighter_id",
            post(assign_firefighter),
        )
}

pub async fn list_requests(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    Ok(list_response(state.services.requests.find_all().await?))
}

pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(success_response(state.services.requests.find_by_id(id).await?))
}

pub async fn create_request(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ResourceRequestPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.requests.save(payload).await?;
    Ok(created_response("Solicitud Recurso creada con éxito."))
}

pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<ResourceRequestPayload>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.requests.update(id, payload).await?;
    Ok(confirmation(StatusCode::OK, "Actualizado con éxito"))
}

pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.requests.delete(id).await?;
    Ok(confirmation(
        StatusCode::OK,
        "Solicitud Recurso eliminada con éxito.",
    ))
}

pub async fn assign_resource(
    State(state): State<AppState>,
    Path((id, resource_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.requests.assign_resource(id, resource_id).await?;
    Ok(confirmation(
        StatusCode::OK,
        "Recurso asignado a la Solicitud Recurso exitosamente",
    ))
}

pub async fn assign_firefighter(
    State(state): State<AppState>,
    Path((id, firefighter_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .requests
        .assign_firefighter(id, firefighter_id)
        .await?;
    Ok(confirmation(
        StatusCode::OK,
        "Bombero asignado a la Solicitud Recurso exitosamente",
    ))
}
