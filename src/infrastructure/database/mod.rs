pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::SeaOrmRepositoryProvider;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use migrator::Migrator;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./fitness.db?mode=rwc")
    pub url: String,
}

/// Initialize database connection and bring the schema up to date
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!(url = %config.url, "Connecting to database");
    let mut opts = ConnectOptions::new(config.url.clone());
    opts.sqlx_logging(false);
    if config.url.contains(":memory:") {
        // every pooled connection would open its own empty database
        opts.max_connections(1).min_connections(1);
    }
    let db = Database::connect(opts).await?;

    Migrator::up(&db, None).await?;
    info!("Database connected and migrated");
    Ok(db)
}
