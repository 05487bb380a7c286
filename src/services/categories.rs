use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::dto::{CategoryPayload, CategoryView};
use crate::entities::{resource, resource_type, vehicle, vehicle_type};
use crate::errors::ServiceError;
use crate::repositories::{EntityRepository, Repository};
use crate::services::validation::validate_category_name;

/// A named category that other entities point at
pub trait Category: EntityTrait {
    /// Entity whose rows reference this category
    type Dependent: EntityTrait;

    /// Human name used in messages, e.g. "Tipo Recurso"
    const LABEL: &'static str;
    const NOT_FOUND: &'static str;

    fn id_of(model: &Self::Model) -> i32;
    fn name_of(model: &Self::Model) -> &str;
    fn draft(name: String) -> Self::ActiveModel;
    fn renamed(model: Self::Model, name: String) -> Self::ActiveModel;
    fn dependent_column() -> <Self::Dependent as EntityTrait>::Column;

    fn view(model: &Self::Model) -> CategoryView {
        CategoryView {
            id: Self::id_of(model),
            name: Self::name_of(model).to_string(),
        }
    }
}

impl Category for resource_type::Entity {
    type Dependent = resource::Entity;

    const LABEL: &'static str = "Tipo Recurso";
    const NOT_FOUND: &'static str = "Tipo Recurso no encontrado";

    fn id_of(model: &resource_type::Model) -> i32 {
        model.id
    }

    fn name_of(model: &resource_type::Model) -> &str {
        &model.name
    }

    fn draft(name: String) -> resource_type::ActiveModel {
        resource_type::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
    }

    fn renamed(model: resource_type::Model, name: String) -> resource_type::ActiveModel {
        let mut active: resource_type::ActiveModel = model.into();
        active.name = Set(name);
        active
    }

    fn dependent_column() -> resource::Column {
        resource::Column::ResourceTypeId
    }
}

impl Category for vehicle_type::Entity {
    type Dependent = vehicle::Entity;

    const LABEL: &'static str = "Tipo Vehiculo";
    const NOT_FOUND: &'static str = "Tipo Vehiculo no encontrado";

    fn id_of(model: &vehicle_type::Model) -> i32 {
        model.id
    }

    fn name_of(model: &vehicle_type::Model) -> &str {
        &model.name
    }

    fn draft(name: String) -> vehicle_type::ActiveModel {
        vehicle_type::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
    }

    fn renamed(model: vehicle_type::Model, name: String) -> vehicle_type::ActiveModel {
        let mut active: vehicle_type::ActiveModel = model.into();
        active.name = Set(name);
        active
    }

    fn dependent_column() -> vehicle::Column {
        vehicle::Column::VehicleTypeId
    }
}

/// Object-safe view of a category service, used by the HTTP layer
#[async_trait]
pub trait CategoryStore: Send + Sync {
    fn label(&self) -> &'static str;
    async fn find_all(&self) -> Result<Vec<CategoryView>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<CategoryView, ServiceError>;
    async fn save(&self, payload: CategoryPayload) -> Result<CategoryView, ServiceError>;
    async fn update(&self, id: i32, payload: CategoryPayload)
        -> Result<CategoryView, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

pub type ResourceTypeService = CategoryService<resource_type::Entity>;
pub type VehicleTypeService = CategoryService<vehicle_type::Entity>;

/// CRUD for one category table
pub struct CategoryService<C> {
    repository: EntityRepository<C>,
}

impl<C> Clone for CategoryService<C> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<C> CategoryService<C>
where
    C: Category,
    C::Model: IntoActiveModel<C::ActiveModel> + Send + Sync,
    C::ActiveModel: ActiveModelBehavior + Send,
    <C::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    <C::Dependent as EntityTrait>::Model: Send + Sync,
{
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: EntityRepository::new(db),
        }
    }

    /// Loads the row or fails with the category's NotFound message
    pub async fn get_model(&self, id: i32) -> Result<C::Model, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(C::NOT_FOUND))
    }

    /// Turns a category reference into a stored row on `db`.
    ///
    /// A reference carrying an id must point at an existing row; one without an
    /// id is validated and inserted as a new category.
    pub async fn resolve_with<D: ConnectionTrait>(
        &self,
        db: &D,
        reference: Option<&CategoryPayload>,
    ) -> Result<C::Model, ServiceError> {
        let reference = reference
            .ok_or_else(|| ServiceError::invalid(format!("El {} es requerido", C::LABEL)))?;

        match reference.id {
            Some(id) => self
                .repository
                .find_by_id_with(db, id)
                .await?
                .ok_or_else(|| ServiceError::not_found(C::NOT_FOUND)),
            None => {
                let name = validate_category_name(C::LABEL, reference.name.as_deref())?;
                let created = self.repository.insert_with(db, C::draft(name)).await?;
                info!(
                    category = C::LABEL,
                    id = C::id_of(&created),
                    "Category created from nested reference"
                );
                Ok(created)
            }
        }
    }

    async fn dependents(&self, id: i32) -> Result<u64, ServiceError> {
        Ok(<C::Dependent as EntityTrait>::find()
            .filter(C::dependent_column().eq(id))
            .count(self.repository.get_db())
            .await?)
    }
}

#[async_trait]
impl<C> CategoryStore for CategoryService<C>
where
    C: Category,
    C::Model: IntoActiveModel<C::ActiveModel> + Send + Sync,
    C::ActiveModel: ActiveModelBehavior + Send,
    <C::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    <C::Dependent as EntityTrait>::Model: Send + Sync,
{
    fn label(&self) -> &'static str {
        C::LABEL
    }

    #[instrument(skip(self), fields(category = C::LABEL))]
    async fn find_all(&self) -> Result<Vec<CategoryView>, ServiceError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.iter().map(C::view).collect())
    }

    #[instrument(skip(self), fields(category = C::LABEL))]
    async fn find_by_id(&self, id: i32) -> Result<CategoryView, ServiceError> {
        let model = self.get_model(id).await?;
        Ok(C::view(&model))
    }

    #[instrument(skip(self), fields(category = C::LABEL))]
    async fn save(&self, payload: CategoryPayload) -> Result<CategoryView, ServiceError> {
        let name = validate_category_name(C::LABEL, payload.name.as_deref()).map_err(|e| {
            warn!(error = %e, "Rejected category");
            e
        })?;
        let created = self.repository.insert(C::draft(name)).await?;
        info!(id = C::id_of(&created), "Category created");
        Ok(C::view(&created))
    }

    #[instrument(skip(self), fields(category = C::LABEL))]
    async fn update(&self, id: i32, payload: CategoryPayload) -> Result<CategoryView, ServiceError> {
        let existing = self.get_model(id).await?;
        let Some(name) = payload.name else {
            return Ok(C::view(&existing));
        };
        let name = validate_category_name(C::LABEL, Some(&name))?;
        let updated = self.repository.update(C::renamed(existing, name)).await?;
        info!(id, "Category updated");
        Ok(C::view(&updated))
    }

    #[instrument(skip(self), fields(category = C::LABEL))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get_model(id).await?;
        if self.dependents(id).await? > 0 {
            return Err(ServiceError::conflict(format!(
                "El {} está asignado a otros registros y no puede eliminarse",
                C::LABEL
            )));
        }
        self.repository.delete_by_id(id).await?;
        info!(id, "Category deleted");
        Ok(())
    }
}
