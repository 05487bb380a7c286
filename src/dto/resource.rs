use serde::{Deserialize, Serialize};

use super::{CategoryPayload, CategoryView};
use crate::entities::{resource, resource_type};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourcePayload {
    #[serde(default, rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Kept wide so out-of-range values reach validation instead of failing to parse
    #[serde(default, rename = "cantidad", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "tipoRecurso", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<CategoryPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceView {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "tipoRecurso")]
    pub resource_type: Option<CategoryView>,
}

impl ResourceView {
    pub fn new(model: resource::Model, resource_type: Option<resource_type::Model>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            status: model.status,
            resource_type: resource_type.map(|t| CategoryView {
                id: t.id,
                name: t.name,
            }),
        }
    }
}
