mod common;

use assert_matches::assert_matches;
use common::TestApp;
use rescue_resources_api::{
    dto::{CategoryPayload, ResourcePayload},
    errors::ServiceError,
    services::{CategoryStore, ResourceService, ResourceTypeService, VehicleTypeService},
};

#[tokio::test]
async fn category_crud_round_trip() {
    let app = TestApp::new().await;
    let service = ResourceTypeService::new(app.db());

    assert!(service.find_all().await.unwrap().is_empty());

    let created = service.save(CategoryPayload::named("Rescate")).await.unwrap();
    assert_eq!(created.name, "Rescate");
    assert_eq!(service.find_by_id(created.id).await.unwrap(), created);

    let renamed = service
        .update(created.id, CategoryPayload::named("Rescate Vertical"))
        .await
        .unwrap();
    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.name, "Rescate Vertical");

    service.delete(created.id).await.unwrap();
    assert_matches!(
        service.find_by_id(created.id).await,
        Err(ServiceError::NotFound(msg)) if msg == "Tipo Recurso no encontrado"
    );
}

#[tokio::test]
async fn update_without_name_keeps_the_current_one() {
    let app = TestApp::new().await;
    let service = VehicleTypeService::new(app.db());
    let created = service.save(CategoryPayload::named("Bomba")).await.unwrap();

    let unchanged = service
        .update(created.id, CategoryPayload::default())
        .await
        .unwrap();
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn category_names_are_required_and_bounded() {
    let app = TestApp::new().await;
    let service = VehicleTypeService::new(app.db());

    assert_matches!(
        service.save(CategoryPayload::default()).await,
        Err(ServiceError::ValidationError(msg)) if msg == "El nombre del Tipo Vehiculo es requerido"
    );
    assert_matches!(
        service.save(CategoryPayload::named("x".repeat(51))).await,
        Err(ServiceError::ValidationError(msg)) if msg == "El nombre no puede exceder los 50 caracteres"
    );

    let created = service.save(CategoryPayload::named("Escala")).await.unwrap();
    assert_matches!(
        service
            .update(created.id, CategoryPayload::named("y".repeat(51)))
            .await,
        Err(ServiceError::ValidationError(_))
    );
    assert_eq!(service.find_by_id(created.id).await.unwrap().name, "Escala");
}

#[tokio::test]
async fn missing_categories_are_not_found() {
    let app = TestApp::new().await;
    let service = VehicleTypeService::new(app.db());

    assert_matches!(
        service.update(404, CategoryPayload::named("Bomba")).await,
        Err(ServiceError::NotFound(msg)) if msg == "Tipo Vehiculo no encontrado"
    );
    assert_matches!(service.delete(404).await, Err(ServiceError::NotFound(_)));
}

#[tokio::test]
async fn category_in_use_cannot_be_deleted() {
    let app = TestApp::new().await;
    let types = ResourceTypeService::new(app.db());
    let resources = ResourceService::new(app.db());

    let category = types.save(CategoryPayload::named("Rescate")).await.unwrap();
    let resource = resources
        .save(ResourcePayload {
            name: Some("Cuerda".into()),
            quantity: Some(4),
            status: Some("Disponible".into()),
            resource_type: Some(CategoryPayload::existing(category.id)),
        })
        .await
        .unwrap();

    assert_matches!(types.delete(category.id).await, Err(ServiceError::Conflict(_)));

    resources.delete(resource.id).await.unwrap();
    types.delete(category.id).await.unwrap();
}
