mod common;

use assert_matches::assert_matches;
use common::TestApp;
use rescue_resources_api::{
    dto::CategoryPayload,
    entities::{firefighter, resource_type, vehicle},
    errors::ServiceError,
    repositories::EntityRepository,
    services::{CategoryStore, ResourceService, VehicleTypeService},
};
use sea_orm::{ActiveModelTrait, Set};

// These writes skip the service pre-checks so the database constraints decide.

#[tokio::test]
async fn duplicate_firefighter_phone_is_a_conflict() {
    let app = TestApp::new().await;
    app.insert_firefighter("Ana", 912_345_678).await;

    let err = firefighter::ActiveModel {
        first_name: Set("Luis".to_string()),
        paternal_surname: Set("Vera".to_string()),
        maternal_surname: Set("Mella".to_string()),
        phone: Set(912_345_678),
        ..Default::default()
    }
    .insert(app.db().as_ref())
    .await
    .expect_err("phone index must reject the duplicate");

    let err: ServiceError = err.into();
    assert_matches!(err, ServiceError::Conflict(msg) if msg.starts_with("Registro duplicado"));
}

#[tokio::test]
async fn duplicate_vehicle_plate_is_a_conflict() {
    let app = TestApp::new().await;
    let bomba = VehicleTypeService::new(app.db())
        .save(CategoryPayload::named("Bomba"))
        .await
        .unwrap();

    let row = |driver: &str| vehicle::ActiveModel {
        brand: Set("Scania".to_string()),
        model: Set("P320".to_string()),
        plate: Set("KX1234".to_string()),
        driver: Set(driver.to_string()),
        status: Set("Disponible".to_string()),
        vehicle_type_id: Set(bomba.id),
        ..Default::default()
    };
    row("Juan Pérez").insert(app.db().as_ref()).await.unwrap();

    let err = row("Pedro Díaz")
        .insert(app.db().as_ref())
        .await
        .expect_err("plate index must reject the duplicate");

    let err: ServiceError = err.into();
    assert_matches!(err, ServiceError::Conflict(msg) if msg.starts_with("Registro duplicado"));
}

#[tokio::test]
async fn deleting_a_referenced_type_is_a_conflict() {
    let app = TestApp::new().await;
    let resource_id = app.seed_resource("Manguera").await;
    let resource = ResourceService::new(app.db())
        .find_by_id(resource_id)
        .await
        .unwrap();
    let type_id = resource.resource_type.expect("resource type").id;

    let types = EntityRepository::<resource_type::Entity>::new(app.db());
    assert_matches!(
        types.delete_by_id(type_id).await,
        Err(ServiceError::Conflict(msg)) if msg.starts_with("El registro está referenciado")
    );
    assert!(types.exists_by_id(type_id).await.unwrap());
}
