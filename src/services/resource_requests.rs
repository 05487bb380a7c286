use sea_orm::{ActiveValue, DatabaseConnection, Set};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::dto::{EntityRef, ResourceRequestPayload, ResourceRequestView};
use crate::entities::{firefighter, resource, resource_request, resource_type};
use crate::errors::ServiceError;
use crate::repositories::{FirefighterRepository, ResourceRepository, ResourceRequestRepository};
use crate::services::categories::{Category, ResourceTypeService};
use crate::services::resources::RESOURCE_NOT_FOUND;
use crate::services::validation::{
    validate_category_name, validate_firefighter, validate_resource, REQUEST_DETAIL,
    REQUEST_STATUS, REQUEST_TITLE,
};

pub const REQUEST_NOT_FOUND: &str = "Solicitud Recurso no encontrada";
pub const FIREFIGHTER_NOT_FOUND: &str = "Bombero no encontrado";
pub const DUPLICATE_PHONE: &str = "El Telefono ya existe";

/// Requests filed by firefighters for a specific resource
#[derive(Clone)]
pub struct ResourceRequestService {
    repository: ResourceRequestRepository,
    firefighters: FirefighterRepository,
    resources: ResourceRepository,
    resource_types: ResourceTypeService,
}

impl ResourceRequestService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: ResourceRequestRepository::new(db.clone()),
            firefighters: FirefighterRepository::new(db.clone()),
            resources: ResourceRepository::new(db.clone()),
            resource_types: ResourceTypeService::new(db),
        }
    }

    async fn get_model(&self, id: i32) -> Result<resource_request::Model, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(REQUEST_NOT_FOUND))
    }

    async fn get_firefighter(&self, id: i32) -> Result<firefighter::Model, ServiceError> {
        self.firefighters
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(FIREFIGHTER_NOT_FOUND))
    }

    async fn get_resource(&self, id: i32) -> Result<resource::Model, ServiceError> {
        self.resources
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(RESOURCE_NOT_FOUND))
    }

    /// Loads the referenced firefighter and checks it is fit to file a request
    async fn checked_firefighter(
        &self,
        reference: Option<&EntityRef>,
    ) -> Result<firefighter::Model, ServiceError> {
        let id = reference
            .and_then(|r| r.id)
            .ok_or_else(|| ServiceError::invalid("El Bombero es requerido"))?;
        let firefighter = self.get_firefighter(id).await?;

        validate_firefighter(&firefighter).map_err(|e| e.context("Bombero inválido"))?;
        if self
            .firefighters
            .phone_in_use_by_other(firefighter.phone, firefighter.id)
            .await?
        {
            return Err(ServiceError::conflict(DUPLICATE_PHONE));
        }
        Ok(firefighter)
    }

    /// Loads the referenced resource and applies the resource rules to it,
    /// including its category
    async fn checked_resource(
        &self,
        reference: Option<&EntityRef>,
    ) -> Result<resource::Model, ServiceError> {
        let id = reference
            .and_then(|r| r.id)
            .ok_or_else(|| ServiceError::invalid("El Recurso es requerido"))?;
        let resource = self.get_resource(id).await?;

        let category = self.resource_types.get_model(resource.resource_type_id).await?;
        validate_resource(&resource)
            .and_then(|_| {
                validate_category_name(resource_type::Entity::LABEL, Some(&category.name))
            })
            .map_err(|e| e.context("Recurso inválido"))?;
        Ok(resource)
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<ResourceRequestView>, ServiceError> {
        let rows = self.repository.find_all_with_relations().await?;
        Ok(rows
            .into_iter()
            .map(|(request, firefighter, resource)| {
                ResourceRequestView::new(request, firefighter, resource)
            })
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<ResourceRequestView, ServiceError> {
        let request = self.get_model(id).await?;
        let firefighter = self.firefighters.find_by_id(request.firefighter_id).await?;
        let resource = self.resources.find_by_id(request.resource_id).await?;
        Ok(ResourceRequestView::new(request, firefighter, resource))
    }

    #[instrument(skip(self, payload))]
    pub async fn save(
        &self,
        payload: ResourceRequestPayload,
    ) -> Result<ResourceRequestView, ServiceError> {
        let title = REQUEST_TITLE.require(payload.title.as_deref())?;
        let detail = REQUEST_DETAIL.require(payload.detail.as_deref())?;
        let status = REQUEST_STATUS.require(payload.status.as_deref())?;
        let firefighter = self.checked_firefighter(payload.firefighter.as_ref()).await?;
        let resource = self.checked_resource(payload.resource.as_ref()).await?;

        let draft = resource_request::ActiveModel {
            title: Set(title),
            detail: Set(detail),
            status: Set(status),
            firefighter_id: Set(firefighter.id),
            resource_id: Set(resource.id),
            ..Default::default()
        };
        let created = self.repository.insert(draft).await?;

        info!(
            id = created.id,
            firefighter_id = firefighter.id,
            resource_id = resource.id,
            "Resource request created"
        );
        Ok(ResourceRequestView::new(
            created,
            Some(firefighter),
            Some(resource),
        ))
    }

    /// Overwrites the fields present on `payload`. A swapped firefighter or
    /// resource goes through the same checks as on save. Nothing is written
    /// unless every check passes.
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: i32,
        payload: ResourceRequestPayload,
    ) -> Result<ResourceRequestView, ServiceError> {
        let existing = self.get_model(id).await?;
        let mut merged = existing.clone();

        if let Some(title) = REQUEST_TITLE.optional(payload.title.as_deref())? {
            merged.title = title;
        }
        if let Some(detail) = REQUEST_DETAIL.optional(payload.detail.as_deref())? {
            merged.detail = detail;
        }
        if let Some(status) = REQUEST_STATUS.optional(payload.status.as_deref())? {
            merged.status = status;
        }
        if let Some(reference) = payload.firefighter.as_ref() {
            merged.firefighter_id = self.checked_firefighter(Some(reference)).await?.id;
        }
        if let Some(reference) = payload.resource.as_ref() {
            merged.resource_id = self.checked_resource(Some(reference)).await?.id;
        }

        let active = resource_request::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            title: Set(merged.title),
            detail: Set(merged.detail),
            status: Set(merged.status),
            firefighter_id: Set(merged.firefighter_id),
            resource_id: Set(merged.resource_id),
        };
        let updated = self.repository.update(active).await.map_err(|e| {
            warn!(id, error = %e, "Resource request update failed");
            e
        })?;

        info!(id, "Resource request updated");
        self.find_by_id(updated.id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ServiceError::not_found(REQUEST_NOT_FOUND));
        }
        self.repository.delete_by_id(id).await?;
        info!(id, "Resource request deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn assign_resource(&self, request_id: i32, resource_id: i32) -> Result<(), ServiceError> {
        let request = self.get_model(request_id).await?;
        let resource = self.get_resource(resource_id).await?;

        let mut active: resource_request::ActiveModel = request.into();
        active.resource_id = Set(resource.id);
        self.repository.update(active).await?;

        info!(request_id, resource_id, "Resource assigned to request");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn assign_firefighter(
        &self,
        request_id: i32,
        firefighter_id: i32,
    ) -> Result<(), ServiceError> {
        let request = self.get_model(request_id).await?;
        let firefighter = self.get_firefighter(firefighter_id).await?;

        let mut active: resource_request::ActiveModel = request.into();
        active.firefighter_id = Set(firefighter.id);
        self.repository.update(active).await?;

        info!(request_id, firefighter_id, "Firefighter assigned to request");
        Ok(())
    }
}
