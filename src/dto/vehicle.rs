use serde::{Deserialize, Serialize};

use super::{CategoryPayload, CategoryView};
use crate::entities::{vehicle, vehicle_type};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VehiclePayload {
    #[serde(default, rename = "marca", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, rename = "modelo", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, rename = "patente", skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
    #[serde(default, rename = "conductor", skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "tipoVehiculo", skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<CategoryPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VehicleView {
    pub id: i32,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "patente")]
    pub plate: String,
    #[serde(rename = "conductor")]
    pub driver: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "tipoVehiculo")]
    pub vehicle_type: Option<CategoryView>,
}

impl VehicleView {
    pub fn new(model: vehicle::Model, vehicle_type: Option<vehicle_type::Model>) -> Self {
        Self {
            id: model.id,
            brand: model.brand,
            model: model.model,
            plate: model.plate,
            driver: model.driver,
            status: model.status,
            vehicle_type: vehicle_type.map(|t| CategoryView {
                id: t.id,
                name: t.name,
            }),
        }
    }
}
