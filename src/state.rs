use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;

use crate::bootstrap;
use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// SeaORM connection over the shared pool; each request checks out its own connection
    pub db: DatabaseConnection,
    pub config: Config,
}

impl AppState {
    /// Connect, create the schema if absent and seed the admin account
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let pg_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await
            .map_err(|e| AppStateError::Postgres(e.to_string()))?;

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pg_pool)
            .await
            .map_err(|e| AppStateError::Migration(e.to_string()))?;

        // SeaORM shares the same pool
        let db = SqlxPostgresConnector::from_sqlx_postgres_pool(pg_pool);

        bootstrap::seed_admin(&db, &config.admin)
            .await
            .map_err(|e| AppStateError::Seed(e.to_string()))?;

        Ok(Self { db, config })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("PostgreSQL connection error: {0}")]
    Postgres(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Admin seeding error: {0}")]
    Seed(String),
}
