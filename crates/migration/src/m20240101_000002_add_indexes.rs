use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_employees::Employees;

const UNIQ_EMPLOYEE_EMAIL: &str = "uniq_employees_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Employees: email is unique across all rows
        manager
            .create_index(
                Index::create()
                    .name(UNIQ_EMPLOYEE_EMAIL)
                    .table(Employees::Table)
                    .col(Employees::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UNIQ_EMPLOYEE_EMAIL)
                    .table(Employees::Table)
                    .to_owned(),
            )
            .await
    }
}
