mod common;

use assert_matches::assert_matches;
use common::TestApp;
use rescue_resources_api::{
    dto::{EntityRef, ResourceRequestPayload},
    errors::ServiceError,
    repositories::FirefighterRepository,
    services::ResourceRequestService,
};

fn request(firefighter_id: i32, resource_id: i32) -> ResourceRequestPayload {
    ResourceRequestPayload {
        title: Some("Reposición de mangueras".into()),
        detail: Some("Se requieren dos mangueras tras el incendio".into()),
        status: Some("Pendiente".into()),
        firefighter: Some(EntityRef::to(firefighter_id)),
        resource: Some(EntityRef::to(resource_id)),
    }
}

#[tokio::test]
async fn save_expands_firefighter_and_resource() {
    let app = TestApp::new().await;
    let firefighter = app.insert_firefighter("Ana", 912_345_678).await;
    let resource_id = app.seed_resource("Manguera").await;
    let service = ResourceRequestService::new(app.db());

    let saved = service.save(request(firefighter.id, resource_id)).await.unwrap();
    let bombero = saved.firefighter.clone().expect("firefighter");
    assert_eq!(bombero.first_name, "Ana");
    assert_eq!(bombero.phone, 912_345_678);
    assert_eq!(saved.resource.as_ref().map(|r| r.id), Some(resource_id));

    assert_eq!(service.find_by_id(saved.id).await.unwrap(), saved);
    assert_eq!(service.find_all().await.unwrap(), vec![saved]);
}

#[tokio::test]
async fn save_requires_valid_references() {
    let app = TestApp::new().await;
    let firefighter = app.insert_firefighter("Ana", 912_345_678).await;
    let resource_id = app.seed_resource("Manguera").await;
    let service = ResourceRequestService::new(app.db());

    assert_matches!(
        service
            .save(ResourceRequestPayload {
                firefighter: None,
                ..request(firefighter.id, resource_id)
            })
            .await,
        Err(ServiceError::ValidationError(msg)) if msg == "El Bombero es requerido"
    );
    assert_matches!(
        service
            .save(ResourceRequestPayload {
                resource: Some(EntityRef::default()),
                ..request(firefighter.id, resource_id)
            })
            .await,
        Err(ServiceError::ValidationError(msg)) if msg == "El Recurso es requerido"
    );
    assert_matches!(
        service.save(request(99_999, resource_id)).await,
        Err(ServiceError::NotFound(msg)) if msg == "Bombero no encontrado"
    );
    assert_matches!(
        service.save(request(firefighter.id, 99_999)).await,
        Err(ServiceError::NotFound(msg)) if msg == "Recurso no encontrado"
    );
    assert!(service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn firefighter_with_invalid_phone_cannot_file_requests() {
    let app = TestApp::new().await;
    let firefighter = app.insert_firefighter("Diego", 0).await;
    let resource_id = app.seed_resource("Casco").await;
    let service = ResourceRequestService::new(app.db());

    assert_matches!(
        service.save(request(firefighter.id, resource_id)).await,
        Err(ServiceError::ValidationError(msg))
            if msg == "Bombero inválido: El Telefono debe ser un número positivo"
    );
}

#[tokio::test]
async fn text_fields_are_bounded() {
    let app = TestApp::new().await;
    let firefighter = app.insert_firefighter("Ana", 912_345_678).await;
    let resource_id = app.seed_resource("Manguera").await;
    let service = ResourceRequestService::new(app.db());

    assert_matches!(
        service
            .save(ResourceRequestPayload {
                detail: Some("d".repeat(401)),
                ..request(firefighter.id, resource_id)
            })
            .await,
        Err(ServiceError::ValidationError(msg)) if msg == "El Detalle no puede exceder los 400 caracteres"
    );
    assert!(service
        .save(ResourceRequestPayload {
            detail: Some("d".repeat(400)),
            ..request(firefighter.id, resource_id)
        })
        .await
        .is_ok());
}

#[tokio::test]
async fn long_title_update_leaves_request_unchanged() {
    let app = TestApp::new().await;
    let firefighter = app.insert_firefighter("Ana", 912_345_678).await;
    let resource_id = app.seed_resource("Manguera").await;
    let service = ResourceRequestService::new(app.db());
    let saved = service.save(request(firefighter.id, resource_id)).await.unwrap();

    assert_matches!(
        service
            .update(
                saved.id,
                ResourceRequestPayload {
                    title: Some("t".repeat(51)),
                    ..Default::default()
                },
            )
            .await,
        Err(ServiceError::ValidationError(msg)) if msg == "El titulo no puede exceder los 50 caracteres"
    );
    assert_eq!(service.find_by_id(saved.id).await.unwrap(), saved);
}

#[tokio::test]
async fn update_revalidates_swapped_references() {
    let app = TestApp::new().await;
    let firefighter = app.insert_firefighter("Ana", 912_345_678).await;
    let resource_id = app.seed_resource("Manguera").await;
    let service = ResourceRequestService::new(app.db());
    let saved = service.save(request(firefighter.id, resource_id)).await.unwrap();

    assert_matches!(
        service
            .update(
                saved.id,
                ResourceRequestPayload {
                    status: Some("Completada".into()),
                    resource: Some(EntityRef::to(99_999)),
                    ..Default::default()
                },
            )
            .await,
        Err(ServiceError::NotFound(_))
    );
    assert_eq!(service.find_by_id(saved.id).await.unwrap(), saved);

    let other = app.seed_resource("Extintor").await;
    let updated = service
        .update(
            saved.id,
            ResourceRequestPayload {
                status: Some("En Proceso".into()),
                resource: Some(EntityRef::to(other)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, "En Proceso");
    assert_eq!(updated.title, saved.title);
    assert_eq!(updated.resource.map(|r| r.id), Some(other));
}

#[tokio::test]
async fn assignments_and_delete() {
    let app = TestApp::new().await;
    let ana = app.insert_firefighter("Ana", 912_345_678).await;
    let carlos = app.insert_firefighter("Carlos", 987_654_321).await;
    let hose = app.seed_resource("Manguera").await;
    let helmet = app.seed_resource("Casco").await;
    let service = ResourceRequestService::new(app.db());
    let saved = service.save(request(ana.id, hose)).await.unwrap();

    assert_matches!(
        service.assign_resource(99_999, helmet).await,
        Err(ServiceError::NotFound(msg)) if msg == "Solicitud Recurso no encontrada"
    );
    assert_matches!(
        service.assign_firefighter(saved.id, 99_999).await,
        Err(ServiceError::NotFound(msg)) if msg == "Bombero no encontrado"
    );

    service.assign_resource(saved.id, helmet).await.unwrap();
    service.assign_firefighter(saved.id, carlos.id).await.unwrap();
    let reloaded = service.find_by_id(saved.id).await.unwrap();
    assert_eq!(reloaded.resource.map(|r| r.id), Some(helmet));
    assert_eq!(reloaded.firefighter.map(|f| f.id), Some(carlos.id));

    service.delete(saved.id).await.unwrap();
    assert_matches!(service.find_by_id(saved.id).await, Err(ServiceError::NotFound(_)));
    assert!(FirefighterRepository::new(app.db())
        .exists_by_id(ana.id)
        .await
        .unwrap());
}

#[tokio::test]
async fn missing_requests_are_not_found() {
    let app = TestApp::new().await;
    let service = ResourceRequestService::new(app.db());

    assert_matches!(
        service.find_by_id(99_999).await,
        Err(ServiceError::NotFound(msg)) if msg == "Solicitud Recurso no encontrada"
    );
    assert_matches!(
        service.update(99_999, ResourceRequestPayload::default()).await,
        Err(ServiceError::NotFound(msg)) if msg == "Solicitud Recurso no encontrada"
    );
    assert_matches!(
        service.delete(99_999).await,
        Err(ServiceError::NotFound(msg)) if msg == "Solicitud Recurso no encontrada"
    );
}
