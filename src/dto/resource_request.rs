use serde::{Deserialize, Serialize};

use super::EntityRef;
use crate::entities::{firefighter, resource, resource_request};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceRequestPayload {
    #[serde(default, rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "detalle", skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "bombero", skip_serializing_if = "Option::is_none")]
    pub firefighter: Option<EntityRef>,
    #[serde(default, rename = "recurso", skip_serializing_if = "Option::is_none")]
    pub resource: Option<EntityRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FirefighterView {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "aPaterno")]
    pub paternal_surname: String,
    #[serde(rename = "aMaterno")]
    pub maternal_surname: String,
    #[serde(rename = "telefono")]
    pub phone: i64,
}

impl From<firefighter::Model> for FirefighterView {
    fn from(model: firefighter::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            paternal_surname: model.paternal_surname,
            maternal_surname: model.maternal_surname,
            phone: model.phone,
        }
    }
}

/// Resource as embedded in a request; its category is not expanded
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestedResourceView {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    #[serde(rename = "estado")]
    pub status: String,
}

impl From<resource::Model> for RequestedResourceView {
    fn from(model: resource::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            status: model.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceRequestView {
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "detalle")]
    pub detail: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "bombero")]
    pub firefighter: Option<FirefighterView>,
    #[serde(rename = "recurso")]
    pub resource: Option<RequestedResourceView>,
}

impl ResourceRequestView {
    pub fn new(
        model: resource_request::Model,
        firefighter: Option<firefighter::Model>,
        resource: Option<resource::Model>,
    ) -> Self {
        Self {
            id: model.id,
            title: model.title,
            detail: model.detail,
            status: model.status,
            firefighter: firefighter.map(Into::into),
            resource: resource.map(Into::into),
        }
    }
}
