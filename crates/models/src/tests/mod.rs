use sea_orm::DatabaseConnection;

use crate::db::{connect_and_migrate, DatabaseConfig};



/// Fresh, migrated in-memory database per test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    connect_and_migrate(&DatabaseConfig::sqlite_in_memory()).await
}
