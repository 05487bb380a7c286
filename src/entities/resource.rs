use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub status: String,
    pub resource_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resource_type::Entity",
        from = "Column::ResourceTypeId",
        to = "super::resource_type::Column::Id"
    )]
    ResourceType,
    #[sea_orm(has_many = "super::resource_request::Entity")]
    ResourceRequest,
}

impl Related<super::resource_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceType.def()
    }
}

impl Related<super::resource_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
