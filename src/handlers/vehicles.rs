use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::common::{confirmation, created_response, list_response, success_response, JsonBody};
use crate::dto::VehiclePayload;
use crate::errors::ServiceError;
use crate::AppState;

pub fn vehicle_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route(
            "/:id/asignar-tipo-vehiculo/:vehicle_type_id",
            post(assign_vehicle_type),
        )
}

pub async fn list_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    Ok(list_response(state.services.vehicles.find_all().await?))
}

pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(success_response(state.services.vehicles.find_by_id(id).await?))
}

pub async fn create_vehicle(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VehiclePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.vehicles.save(payload).await?;
    Ok(created_response("Vehiculo creado con éxito."))
}

pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<VehiclePayload>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.vehicles.update(id, payload).await?;
    Ok(confirmation(StatusCode::OK, "Actualizado con éxito"))
}

pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.vehicles.delete(id).await?;
    Ok(confirmation(StatusCode::OK, "Vehiculo eliminado con éxito."))
}

pub async fn assign_vehicle_type(
    State(state): State<AppState>,
    Path((id, vehicle_type_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .vehicles
        .assign_vehicle_type(id, vehicle_type_id)
        .await?;
    Ok(confirmation(
        StatusCode::OK,
        "Tipo Vehiculo asignado al Vehiculo exitosamente",
    ))
}
