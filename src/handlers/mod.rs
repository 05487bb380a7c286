pub mod categories;
pub mod common;
pub mod resource_requests;
pub mod resources;
pub mod vehicles;

use crate::db::DbPool;
use crate::services::{
    CategoryStore, ResourceRequestService, ResourceService, ResourceTypeService, VehicleService,
    VehicleTypeService,
};
use std::sync::Arc;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub resource_types: Arc<dyn CategoryStore>,
    pub vehicle_types: Arc<dyn CategoryStore>,
    pub resources: Arc<ResourceService>,
    pub vehicles: Arc<VehicleService>,
    pub requests: Arc<ResourceRequestService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            resource_types: Arc::new(ResourceTypeService::new(db_pool.clone())),
            vehicle_types: Arc::new(VehicleTypeService::new(db_pool.clone())),
            resources: Arc::new(ResourceService::new(db_pool.clone())),
            vehicles: Arc::new(VehicleService::new(db_pool.clone())),
            requests: Arc::new(ResourceRequestService::new(db_pool)),
        }
    }
}
