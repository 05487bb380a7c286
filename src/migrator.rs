use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_resource_types_table::Migration),
            Box::new(m20240501_000002_create_vehicle_types_table::Migration),
            Box::new(m20240501_000003_create_resources_table::Migration),
            Box::new(m20240501_000004_create_vehicles_table::Migration),
            Box::new(m20240501_000005_create_firefighters_table::Migration),
            Box::new(m20240501_000006_create_resource_requests_table::Migration),
        ]
    }
}

mod m20240501_000001_create_resource_types_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240501_000001_create_resource_types_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ResourceTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ResourceTypes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ResourceTypes::Name)
                                .string_len(50)
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ResourceTypes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum ResourceTypes {
        Table,
        Id,
        Name,
    }
}

mod m20240501_000002_create_vehicle_types_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240501_000002_create_vehicle_types_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(VehicleTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(VehicleTypes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(VehicleTypes::Name).string_len(50).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(VehicleTypes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum VehicleTypes {
        Table,
        Id,
        Name,
    }
}

mod m20240501_000003_create_resources_table {

    use super::m20240501_000001_create_resource_types_table::ResourceTypes;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240501_000003_create_resources_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Resources::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Resources::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Resources::Name).string_len(50).not_null())
                        .col(ColumnDef::new(Resources::Quantity).integer().not_null())
                        .col(ColumnDef::new(Resources::Status).string_len(50).not_null())
                        .col(
                            ColumnDef::new(Resources::ResourceTypeId)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_resources_resource_type_id")
                                .from(Resources::Table, Resources::ResourceTypeId)
                                .to(ResourceTypes::Table, ResourceTypes::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_resources_resource_type_id")
                        .table(Resources::Table)
                        .col(Resources::ResourceTypeId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Resources::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Resources {
        Table,
        Id,
        Name,
        Quantity,
        Status,
        ResourceTypeId,
    }
}

mod m20240501_000004_create_vehicles_table {

    use super::m20240501_000002_create_vehicle_types_table::VehicleTypes;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240501_000004_create_vehicles_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Vehicles::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Vehicles::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Vehicles::Brand).string_len(50).not_null())
                        .col(ColumnDef::new(Vehicles::Model).string_len(50).not_null())
                        .col(ColumnDef::new(Vehicles::Plate).string_len(6).not_null())
                        .col(ColumnDef::new(Vehicles::Driver).string_len(50).not_null())
                        .col(ColumnDef::new(Vehicles::Status).string_len(50).not_null())
                        .col(ColumnDef::new(Vehicles::VehicleTypeId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_vehicles_vehicle_type_id")
                                .from(Vehicles::Table, Vehicles::VehicleTypeId)
                                .to(VehicleTypes::Table, VehicleTypes::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_vehicles_plate_unique")
                        .table(Vehicles::Table)
                        .col(Vehicles::Plate)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_vehicles_vehicle_type_id")
                        .table(Vehicles::Table)
                        .col(Vehicles::VehicleTypeId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Vehicles::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Vehicles {
        Table,
        Id,
        Brand,
        Model,
        Plate,
        Driver,
        Status,
        VehicleTypeId,
    }
}

mod m20240501_000005_create_firefighters_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240501_000005_create_firefighters_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Firefighters::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Firefighters::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Firefighters::FirstName)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Firefighters::PaternalSurname)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Firefighters::MaternalSurname)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Firefighters::Phone).big_integer().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_firefighters_phone_unique")
                        .table(Firefighters::Table)
                        .col(Firefighters::Phone)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Firefighters::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Firefighters {
        Table,
        Id,
        FirstName,
        PaternalSurname,
        MaternalSurname,
        Phone,
    }
}

mod m20240501_000006_create_resource_requests_table {

    use super::m20240501_000003_create_resources_table::Resources;
    use super::m20240501_000005_create_firefighters_table::Firefighters;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240501_000006_create_resource_requests_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ResourceRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ResourceRequests::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ResourceRequests::Title)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ResourceRequests::Detail)
                                .string_len(400)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ResourceRequests::Status)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ResourceRequests::FirefighterId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ResourceRequests::ResourceId)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_resource_requests_firefighter_id")
                                .from(ResourceRequests::Table, ResourceRequests::FirefighterId)
                                .to(Firefighters::Table, Firefighters::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_resource_requests_resource_id")
                                .from(ResourceRequests::Table, ResourceRequests::ResourceId)
                                .to(Resources::Table, Resources::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_resource_requests_resource_id")
                        .table(ResourceRequests::Table)
                        .col(ResourceRequests::ResourceId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ResourceRequests::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ResourceRequests {
        Table,
        Id,
        Title,
        Detail,
        Status,
        FirefighterId,
        ResourceId,
    }
}
