//! Wire-level payloads and views.
//!
//! Incoming payloads keep every key optional; the services decide what is
//! required so that a missing field and an over-long field produce the same
//! kind of error. Views are what the API returns.

use serde::{Deserialize, Serialize};

pub mod resource;
pub mod resource_request;
pub mod vehicle;

pub use resource::{ResourcePayload, ResourceView};
pub use resource_request::{
    FirefighterView, RequestedResourceView, ResourceRequestPayload, ResourceRequestView,
};
pub use vehicle::{VehiclePayload, VehicleView};

/// Reference to an existing row by id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EntityRef {
    pub id: Option<i32>,
}

impl EntityRef {
    pub fn to(id: i32) -> Self {
        Self { id: Some(id) }
    }
}

/// Resource or vehicle category as sent by clients.
///
/// With an `id` it points at an existing category; without one, `nombre`
/// describes a category to create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CategoryPayload {
    pub fn existing(id: i32) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryView {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}
