use sea_orm::DatabaseConnection;
use models::db::{connect_and_migrate, DatabaseConfig};

/// Fresh, migrated in-memory database for the current test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&DatabaseConfig::sqlite_in_memory()).await
}
