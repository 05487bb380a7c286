//! Schema migrations for the rescue resources database.
//!
//! ```text
//! migration up
//! migration down --steps 2
//! migration status --database-url sqlite://rescue_resources.db?mode=rwc
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use rescue_resources_api::{db, migrator::Migrator};

#[derive(Parser)]
#[command(name = "migration", about = "Apply or inspect schema migrations", version)]
struct Cli {
    /// Database URL; falls back to DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply every pending migration
    Up,
    /// Roll back the most recent migrations
    Down {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// List applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    let database_url = cli
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("no database URL: pass --database-url or set DATABASE_URL")?;

    info!("Connecting to database: {}", database_url);
    let db = db::establish_connection(&database_url).await?;

    match cli.command {
        Commands::Up => {
            Migrator::up(&db, None).await?;
            info!("Migration completed successfully");
        }
        Commands::Down { steps } => {
            Migrator::down(&db, Some(steps)).await?;
            info!(steps, "Rolled back migrations");
        }
        Commands::Status => {
            for migration in Migrator::get_applied_migrations(&db).await? {
                info!("applied  {}", migration.name());
            }
            for migration in Migrator::get_pending_migrations(&db).await? {
                info!("pending  {}", migration.name());
            }
        }
    }

    Ok(())
}
