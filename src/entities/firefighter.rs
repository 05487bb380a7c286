use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Firefighter record owned by the personnel system; read-only here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "firefighters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    #[sea_orm(unique)]
    pub phone: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::resource_request::Entity")]
    ResourceRequest,
}

impl Related<super::resource_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
