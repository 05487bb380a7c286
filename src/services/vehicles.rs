use sea_orm::{ActiveValue, DatabaseConnection, Set, TransactionTrait};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::dto::{CategoryPayload, VehiclePayload, VehicleView};
use crate::entities::vehicle;
use crate::errors::ServiceError;
use crate::repositories::VehicleRepository;
use crate::services::categories::VehicleTypeService;
use crate::services::validation::{
    VEHICLE_BRAND, VEHICLE_DRIVER, VEHICLE_MODEL, VEHICLE_PLATE, VEHICLE_STATUS,
};

pub const VEHICLE_NOT_FOUND: &str = "Vehiculo no encontrado";
pub const DUPLICATE_PLATE: &str = "La Patente ya existe";

/// Fleet vehicles, each filed under a vehicle type
#[derive(Clone)]
pub struct VehicleService {
    db: Arc<DatabaseConnection>,
    repository: VehicleRepository,
    types: VehicleTypeService,
}

impl VehicleService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: VehicleRepository::new(db.clone()),
            types: VehicleTypeService::new(db.clone()),
            db,
        }
    }

    async fn get_model(&self, id: i32) -> Result<vehicle::Model, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(VEHICLE_NOT_FOUND))
    }

    /// Fast-path duplicate check; the unique index on plate is the real guard
    async fn ensure_plate_free(&self, plate: &str, excluding: Option<i32>) -> Result<(), ServiceError> {
        if self.repository.exists_by_plate(plate, excluding).await? {
            warn!(plate, "Duplicate plate rejected");
            return Err(ServiceError::conflict(DUPLICATE_PLATE));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<VehicleView>, ServiceError> {
        let rows = self.repository.find_all_with_type().await?;
        Ok(rows
            .into_iter()
            .map(|(vehicle, vehicle_type)| VehicleView::new(vehicle, vehicle_type))
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<VehicleView, ServiceError> {
        let model = self.get_model(id).await?;
        let vehicle_type = self.types.get_model(model.vehicle_type_id).await?;
        Ok(VehicleView::new(model, Some(vehicle_type)))
    }

    #[instrument(skip(self, payload))]
    pub async fn save(&self, payload: VehiclePayload) -> Result<VehicleView, ServiceError> {
        let brand = VEHICLE_BRAND.require(payload.brand.as_deref())?;
        let model = VEHICLE_MODEL.require(payload.model.as_deref())?;
        let plate = VEHICLE_PLATE.require(payload.plate.as_deref())?;
        let driver = VEHICLE_DRIVER.require(payload.driver.as_deref())?;
        let status = VEHICLE_STATUS.require(payload.status.as_deref())?;
        self.ensure_plate_free(&plate, None).await?;

        let txn = self.db.begin().await?;
        let vehicle_type = self
            .types
            .resolve_with(&txn, payload.vehicle_type.as_ref())
            .await?;

        let draft = vehicle::ActiveModel {
            brand: Set(brand),
            model: Set(model),
            plate: Set(plate),
            driver: Set(driver),
            status: Set(status),
            vehicle_type_id: Set(vehicle_type.id),
            ..Default::default()
        };
        let created = self.repository.insert_with(&txn, draft).await?;
        txn.commit().await?;

        info!(id = created.id, plate = %created.plate, "Vehicle created");
        Ok(VehicleView::new(created, Some(vehicle_type)))
    }

    /// Overwrites the fields present on `payload`. The plate check skips the
    /// vehicle itself, so resubmitting its own plate is accepted.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i32, payload: VehiclePayload) -> Result<VehicleView, ServiceError> {
        let existing = self.get_model(id).await?;
        let mut merged = existing.clone();

        if let Some(brand) = VEHICLE_BRAND.optional(payload.brand.as_deref())? {
            merged.brand = brand;
        }
        if let Some(model) = VEHICLE_MODEL.optional(payload.model.as_deref())? {
            merged.model = model;
        }
        if let Some(plate) = VEHICLE_PLATE.optional(payload.plate.as_deref())? {
            self.ensure_plate_free(&plate, Some(id)).await?;
            merged.plate = plate;
        }
        if let Some(driver) = VEHICLE_DRIVER.optional(payload.driver.as_deref())? {
            merged.driver = driver;
        }
        if let Some(status) = VEHICLE_STATUS.optional(payload.status.as_deref())? {
            merged.status = status;
        }

        let txn = self.db.begin().await?;
        let reference = payload
            .vehicle_type
            .unwrap_or_else(|| CategoryPayload::existing(existing.vehicle_type_id));
        let vehicle_type = self.types.resolve_with(&txn, Some(&reference)).await?;

        let active = vehicle::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            brand: Set(merged.brand),
            model: Set(merged.model),
            plate: Set(merged.plate),
            driver: Set(merged.driver),
            status: Set(merged.status),
            vehicle_type_id: Set(vehicle_type.id),
        };
        let updated = self.repository.update_with(&txn, active).await?;
        txn.commit().await?;

        info!(id, "Vehicle updated");
        Ok(VehicleView::new(updated, Some(vehicle_type)))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ServiceError::not_found(VEHICLE_NOT_FOUND));
        }
        self.repository.delete_by_id(id).await?;
        info!(id, "Vehicle deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn assign_vehicle_type(
        &self,
        vehicle_id: i32,
        vehicle_type_id: i32,
    ) -> Result<(), ServiceError> {
        let vehicle = self.get_model(vehicle_id).await?;
        let vehicle_type = self.types.get_model(vehicle_type_id).await?;

        let mut active: vehicle::ActiveModel = vehicle.into();
        active.vehicle_type_id = Set(vehicle_type.id);
        self.repository.update(active).await?;

        info!(vehicle_id, vehicle_type_id, "Vehicle type assigned");
        Ok(())
    }
}
