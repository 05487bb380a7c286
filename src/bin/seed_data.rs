//! Seed data script - populates the database with demo data
//!
//! Run with: cargo run --bin seed-data
//!
//! This creates:
//! - 5 firefighters (inserted directly, they belong to the personnel system)
//! - resource and vehicle types
//! - 5 resources and 5 vehicles
//! - 5 resource requests in various states

use std::sync::Arc;

use anyhow::Context;
use rand::{seq::SliceRandom, Rng};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::{info, warn};

use rescue_resources_api::{
    db,
    dto::{CategoryPayload, EntityRef, ResourcePayload, ResourceRequestPayload, VehiclePayload},
    entities::firefighter,
    errors::ServiceError,
    services::{
        CategoryStore, ResourceRequestService, ResourceService, ResourceTypeService,
        VehicleService, VehicleTypeService,
    },
};

const STATUSES: [&str; 4] = ["Pendiente", "En Proceso", "Completada", "Rechazada"];
const SEED_COUNT: usize = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Rescue Resources Seed Data ===");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://rescue_resources.db?mode=rwc".to_string());
    info!("Connecting to database: {}", database_url);
    let db = Arc::new(db::establish_connection(&database_url).await?);
    db::run_migrations(&db).await?;

    info!("Creating firefighters...");
    let firefighters = create_firefighters(&db).await?;
    info!("  Created {} firefighters", firefighters.len());

    info!("Creating categories...");
    let resource_types = ResourceTypeService::new(db.clone());
    let vehicle_types = VehicleTypeService::new(db.clone());
    let mut resource_type_ids = Vec::new();
    for name in ["Rescate", "Primeros Auxilios", "Extinción"] {
        resource_type_ids.push(resource_types.save(CategoryPayload::named(name)).await?.id);
    }
    let mut vehicle_type_ids = Vec::new();
    for name in ["Bomba", "Ambulancia", "Escala"] {
        vehicle_type_ids.push(vehicle_types.save(CategoryPayload::named(name)).await?.id);
    }

    info!("Creating resources...");
    let resources = ResourceService::new(db.clone());
    let mut resource_ids = Vec::new();
    for (i, name) in ["Botiquín", "Manguera", "Extintor", "Cuerda", "Casco"]
        .iter()
        .enumerate()
    {
        let payload = ResourcePayload {
            name: Some(name.to_string()),
            quantity: Some(rand::thread_rng().gen_range(1..=100)),
            status: Some(random_status()),
            resource_type: Some(CategoryPayload::existing(
                resource_type_ids[i % resource_type_ids.len()],
            )),
        };
        resource_ids.push(resources.save(payload).await?.id);
    }
    info!("  Created {} resources", resource_ids.len());

    info!("Creating vehicles...");
    let vehicles = VehicleService::new(db.clone());
    let mut created_vehicles = 0;
    for (i, (brand, model)) in [
        ("Mercedes-Benz", "Atego"),
        ("Scania", "P360"),
        ("Iveco", "Eurocargo"),
        ("Renault", "Midlum"),
        ("Volvo", "FL"),
    ]
    .iter()
    .enumerate()
    {
        let payload = VehiclePayload {
            brand: Some(brand.to_string()),
            model: Some(model.to_string()),
            plate: Some(format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))),
            driver: Some(format!("Conductor {}", i + 1)),
            status: Some(random_status()),
            vehicle_type: Some(CategoryPayload::existing(
                vehicle_type_ids[i % vehicle_type_ids.len()],
            )),
        };
        match vehicles.save(payload).await {
            Ok(_) => created_vehicles += 1,
            Err(ServiceError::Conflict(msg)) => warn!("Skipping vehicle: {}", msg),
            Err(e) => return Err(e.into()),
        }
    }
    info!("  Created {} vehicles", created_vehicles);

    info!("Creating resource requests...");
    let requests = ResourceRequestService::new(db.clone());
    for i in 0..SEED_COUNT {
        let payload = ResourceRequestPayload {
            title: Some(format!("Solicitud {}", i + 1)),
            detail: Some("Reposición de equipo tras emergencia".to_string()),
            status: Some(random_status()),
            firefighter: Some(EntityRef::to(firefighters[i % firefighters.len()])),
            resource: Some(EntityRef::to(resource_ids[i % resource_ids.len()])),
        };
        requests.save(payload).await?;
    }
    info!("  Created {} resource requests", SEED_COUNT);

    info!("=== Seed Data Complete ===");
    info!("Try: curl http://localhost:8080/api-recursos/v1/recursos");
    Ok(())
}

fn random_status() -> String {
    STATUSES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(STATUSES[0])
        .to_string()
}

async fn create_firefighters(db: &DatabaseConnection) -> anyhow::Result<Vec<i32>> {
    let people = [
        ("Ana", "Rojas", "Soto"),
        ("Carlos", "Muñoz", "Pérez"),
        ("Valentina", "González", "Díaz"),
        ("Diego", "Fuentes", "Lagos"),
        ("Camila", "Herrera", "Vidal"),
    ];

    let mut ids = Vec::with_capacity(people.len());
    for (first_name, paternal, maternal) in people {
        let phone: i64 = rand::thread_rng().gen_range(900_000_000..=999_999_999);
        let model = firefighter::ActiveModel {
            first_name: Set(first_name.to_string()),
            paternal_surname: Set(paternal.to_string()),
            maternal_surname: Set(maternal.to_string()),
            phone: Set(phone),
            ..Default::default()
        }
        .insert(db)
        .await
        .with_context(|| format!("failed to insert firefighter {}", first_name))?;
        ids.push(model.id);
    }
    Ok(ids)
}
