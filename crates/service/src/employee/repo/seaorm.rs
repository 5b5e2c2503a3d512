use sea_orm::DatabaseConnection;

use crate::employee::domain::{Employee, NewEmployee};
use crate::employee::errors::EmployeeError;
use crate::employee::repository::EmployeeRepository;
use models::employee;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn insert(&self, e: NewEmployee) -> Result<Employee, EmployeeError> {
        let created = employee::create(&self.db, &e.first_name, &e.last_name, &e.email)
            .await
            .map_err(|err| EmployeeError::from_model(err, &e.email))?;
        Ok(created.into())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let rows = employee::list(&self.db).await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        Ok(employee::find_by_id(&self.db, id).await?.map(Employee::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError> {
        Ok(employee::find_by_email(&self.db, email).await?.map(Employee::from))
    }

    async fn save(&self, e: Employee) -> Result<Employee, EmployeeError> {
        let email = e.email.clone();
        let saved = employee::save(&self.db, e.into())
            .await
            .map_err(|err| EmployeeError::from_model(err, &email))?;
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), EmployeeError> {
        employee::hard_delete(&self.db, id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn jane() -> NewEmployee {
        NewEmployee { first_name: "Jane".into(), last_name: "Doe".into(), email: "jane@doe.com".into() }
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() -> anyhow::Result<()> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        let stored = repo.insert(jane()).await?;
        assert!(stored.id > 0);

        assert_eq!(repo.find_by_id(stored.id).await?, Some(stored.clone()));
        assert_eq!(repo.find_by_email("jane@doe.com").await?, Some(stored.clone()));
        assert_eq!(repo.find_all().await?, vec![stored]);
        Ok(())
    }

    #[tokio::test]
    async fn unique_violation_maps_to_duplicate_email() -> anyhow::Result<()> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        repo.insert(jane()).await?;

        let err = repo.insert(jane()).await.unwrap_err();
        assert!(matches!(err, EmployeeError::DuplicateEmail(ref email) if email == "jane@doe.com"));
        assert_eq!(repo.find_all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn save_overwrites_and_delete_is_idempotent() -> anyhow::Result<()> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        let mut stored = repo.insert(jane()).await?;
        stored.email = "jane2@doe.com".into();

        let saved = repo.save(stored.clone()).await?;
        assert_eq!(saved, stored);
        assert!(repo.find_by_email("jane@doe.com").await?.is_none());

        repo.delete_by_id(stored.id).await?;
        repo.delete_by_id(stored.id).await?;
        assert!(repo.find_by_id(stored.id).await?.is_none());
        Ok(())
    }
}
