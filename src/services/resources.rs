use sea_orm::{ActiveValue, DatabaseConnection, Set, TransactionTrait};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::dto::{CategoryPayload, ResourcePayload, ResourceView};
use crate::entities::resource;
use crate::errors::ServiceError;
use crate::repositories::ResourceRepository;
use crate::services::categories::ResourceTypeService;
use crate::services::validation::{
    validate_quantity, validate_resource, RESOURCE_NAME, RESOURCE_STATUS,
};

pub const RESOURCE_NOT_FOUND: &str = "Recurso no encontrado";

/// Equipment and supplies, each filed under a resource type
#[derive(Clone)]
pub struct ResourceService {
    db: Arc<DatabaseConnection>,
    repository: ResourceRepository,
    types: ResourceTypeService,
}

impl ResourceService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: ResourceRepository::new(db.clone()),
            types: ResourceTypeService::new(db.clone()),
            db,
        }
    }

    pub(crate) async fn get_model(&self, id: i32) -> Result<resource::Model, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(RESOURCE_NOT_FOUND))
    }

    async fn view(&self, model: resource::Model) -> Result<ResourceView, ServiceError> {
        let resource_type = self.types.get_model(model.resource_type_id).await?;
        Ok(ResourceView::new(model, Some(resource_type)))
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<ResourceView>, ServiceError> {
        let rows = self.repository.find_all_with_type().await?;
        Ok(rows
            .into_iter()
            .map(|(resource, resource_type)| ResourceView::new(resource, resource_type))
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<ResourceView, ServiceError> {
        let model = self.get_model(id).await?;
        self.view(model).await
    }

    /// Validates and stores a new resource.
    ///
    /// The resource type is resolved in the same transaction as the insert, so a
    /// type created from a nested name is rolled back if the insert fails.
    #[instrument(skip(self, payload))]
    pub async fn save(&self, payload: ResourcePayload) -> Result<ResourceView, ServiceError> {
        let quantity = validate_quantity(payload.quantity)?;
        let name = RESOURCE_NAME.require(payload.name.as_deref())?;
        let status = RESOURCE_STATUS.require(payload.status.as_deref())?;

        let txn = self.db.begin().await?;
        let resource_type = self
            .types
            .resolve_with(&txn, payload.resource_type.as_ref())
            .await?;

        let draft = resource::ActiveModel {
            name: Set(name),
            quantity: Set(quantity),
            status: Set(status),
            resource_type_id: Set(resource_type.id),
            ..Default::default()
        };
        let created = self.repository.insert_with(&txn, draft).await?;
        txn.commit().await?;

        info!(id = created.id, resource_type_id = resource_type.id, "Resource created");
        Ok(ResourceView::new(created, Some(resource_type)))
    }

    /// Overwrites the fields present on `payload`; a zero quantity counts as absent.
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: i32,
        payload: ResourcePayload,
    ) -> Result<ResourceView, ServiceError> {
        let existing = self.get_model(id).await?;
        let mut merged = existing.clone();

        if let Some(name) = RESOURCE_NAME.optional(payload.name.as_deref())? {
            merged.name = name;
        }
        if let Some(quantity) = payload.quantity.filter(|q| *q != 0) {
            merged.quantity = validate_quantity(Some(quantity))?;
        }
        if let Some(status) = RESOURCE_STATUS.optional(payload.status.as_deref())? {
            merged.status = status;
        }
        validate_resource(&merged).map_err(|e| {
            warn!(id, error = %e, "Merged resource failed validation");
            e
        })?;

        let txn = self.db.begin().await?;
        let reference = payload
            .resource_type
            .unwrap_or_else(|| CategoryPayload::existing(existing.resource_type_id));
        let resource_type = self.types.resolve_with(&txn, Some(&reference)).await?;
        merged.resource_type_id = resource_type.id;

        let active = resource::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            name: Set(merged.name),
            quantity: Set(merged.quantity),
            status: Set(merged.status),
            resource_type_id: Set(merged.resource_type_id),
        };
        let updated = self.repository.update_with(&txn, active).await?;
        txn.commit().await?;

        info!(id, "Resource updated");
        Ok(ResourceView::new(updated, Some(resource_type)))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get_model(id).await?;
        if self.repository.count_requests(id).await? > 0 {
            return Err(ServiceError::conflict(
                "El Recurso está asignado a solicitudes y no puede eliminarse",
            ));
        }
        self.repository.delete_by_id(id).await?;
        info!(id, "Resource deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn assign_resource_type(
        &self,
        resource_id: i32,
        resource_type_id: i32,
    ) -> Result<(), ServiceError> {
        let resource = self.get_model(resource_id).await?;
        let resource_type = self.types.get_model(resource_type_id).await?;

        let mut active: resource::ActiveModel = resource.into();
        active.resource_type_id = Set(resource_type.id);
        self.repository.update(active).await?;

        info!(resource_id, resource_type_id, "Resource type assigned");
        Ok(())
    }
}
