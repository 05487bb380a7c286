use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, IntoActiveModel, Iterable, LoaderTrait, PaginatorTrait, PrimaryKeyToColumn,
    PrimaryKeyTrait, QueryFilter, QueryOrder,
};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::entities::{
    firefighter, resource, resource_request, resource_type, vehicle, vehicle_type,
};
use crate::errors::ServiceError;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Data access for one entity keyed by an integer id.
///
/// Every write has a `_with` variant taking an explicit connection so services
/// can run several writes inside one transaction.
#[derive(Debug)]
pub struct EntityRepository<E> {
    base: BaseRepository,
    _entity: PhantomData<E>,
}

impl<E> Clone for EntityRepository<E> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> Repository for EntityRepository<E> {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}

pub type ResourceRepository = EntityRepository<resource::Entity>;
pub type VehicleRepository = EntityRepository<vehicle::Entity>;
pub type FirefighterRepository = EntityRepository<firefighter::Entity>;
pub type ResourceRequestRepository = EntityRepository<resource_request::Entity>;

impl<E> EntityRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
            _entity: PhantomData,
        }
    }

    /// All rows ordered by primary key
    pub async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        Ok(query.all(self.get_db()).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<E::Model>, ServiceError> {
        self.find_by_id_with(self.get_db(), id).await
    }

    pub async fn find_by_id_with<C: ConnectionTrait>(
        &self,
        db: &C,
        id: i32,
    ) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(id).one(db).await?)
    }

    pub async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(E::find_by_id(id).count(self.get_db()).await? > 0)
    }

    pub async fn insert(&self, model: E::ActiveModel) -> Result<E::Model, ServiceError> {
        self.insert_with(self.get_db(), model).await
    }

    pub async fn insert_with<C: ConnectionTrait>(
        &self,
        db: &C,
        model: E::ActiveModel,
    ) -> Result<E::Model, ServiceError> {
        Ok(model.insert(db).await?)
    }

    pub async fn update(&self, model: E::ActiveModel) -> Result<E::Model, ServiceError> {
        self.update_with(self.get_db(), model).await
    }

    pub async fn update_with<C: ConnectionTrait>(
        &self,
        db: &C,
        model: E::ActiveModel,
    ) -> Result<E::Model, ServiceError> {
        Ok(model.update(db).await?)
    }

    /// Returns `false` when no row carried the id
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let result = E::delete_by_id(id).exec(self.get_db()).await?;
        Ok(result.rows_affected > 0)
    }
}

impl ResourceRepository {
    pub async fn find_all_with_type(
        &self,
    ) -> Result<Vec<(resource::Model, Option<resource_type::Model>)>, ServiceError> {
        Ok(resource::Entity::find()
            .find_also_related(resource_type::Entity)
            .order_by_asc(resource::Column::Id)
            .all(self.get_db())
            .await?)
    }

    /// Number of resource requests pointing at the resource
    pub async fn count_requests(&self, resource_id: i32) -> Result<u64, ServiceError> {
        Ok(resource_request::Entity::find()
            .filter(resource_request::Column::ResourceId.eq(resource_id))
            .count(self.get_db())
            .await?)
    }
}

impl VehicleRepository {
    pub async fn find_all_with_type(
        &self,
    ) -> Result<Vec<(vehicle::Model, Option<vehicle_type::Model>)>, ServiceError> {
        Ok(vehicle::Entity::find()
            .find_also_related(vehicle_type::Entity)
            .order_by_asc(vehicle::Column::Id)
            .all(self.get_db())
            .await?)
    }

    /// Whether another vehicle already carries `plate`.
    /// `excluding` skips the vehicle being updated.
    pub async fn exists_by_plate(
        &self,
        plate: &str,
        excluding: Option<i32>,
    ) -> Result<bool, ServiceError> {
        let mut query = vehicle::Entity::find().filter(vehicle::Column::Plate.eq(plate));
        if let Some(id) = excluding {
            query = query.filter(vehicle::Column::Id.ne(id));
        }
        Ok(query.count(self.get_db()).await? > 0)
    }
}

impl FirefighterRepository {
    /// Whether a firefighter other than `id` is registered with `phone`
    pub async fn phone_in_use_by_other(&self, phone: i64, id: i32) -> Result<bool, ServiceError> {
        Ok(firefighter::Entity::find()
            .filter(firefighter::Column::Phone.eq(phone))
            .filter(firefighter::Column::Id.ne(id))
            .count(self.get_db())
            .await?
            > 0)
    }
}

impl ResourceRequestRepository {
    /// Requests with their firefighter and resource loaded in two batched queries
    pub async fn find_all_with_relations(
        &self,
    ) -> Result<
        Vec<(
            resource_request::Model,
            Option<firefighter::Model>,
            Option<resource::Model>,
        )>,
        ServiceError,
    > {
        let db = self.get_db();
        let requests = resource_request::Entity::find()
            .order_by_asc(resource_request::Column::Id)
            .all(db)
            .await?;
        let firefighters = requests.load_one(firefighter::Entity, db).await?;
        let resources = requests.load_one(resource::Entity, db).await?;

        Ok(requests
            .into_iter()
            .zip(firefighters)
            .zip(resources)
            .map(|((request, firefighter), resource)| (request, firefighter, resource))
            .collect())
    }
}
