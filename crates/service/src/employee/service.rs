use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Employee, EmployeePatch, NewEmployee};
use super::errors::EmployeeError;
use super::repository::EmployeeRepository;

/// Employee business service independent of web framework
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store a new employee, refusing emails that are already in use.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{EmployeeService, NewEmployee, repository::mock::MockEmployeeRepository};
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(MockEmployeeRepository::default()));
    /// let input = NewEmployee { first_name: "Jane".into(), last_name: "Doe".into(), email: "jane@doe.com".into() };
    /// let stored = tokio_test::block_on(svc.create_employee(input.clone())).unwrap();
    /// assert!(stored.id > 0);
    /// assert!(tokio_test::block_on(svc.create_employee(input)).is_err());
    /// ```
    #[instrument(skip(self, candidate), fields(email = %candidate.email))]
    pub async fn create_employee(&self, candidate: NewEmployee) -> Result<Employee, EmployeeError> {
        if let Some(existing) = self.repo.find_by_email(&candidate.email).await? {
            debug!(existing_id = existing.id, "email already in use");
            return Err(EmployeeError::DuplicateEmail(candidate.email));
        }
        let stored = self.repo.insert(candidate).await?;
        info!(employee_id = stored.id, "employee_created");
        Ok(stored)
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repo.find_all().await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        self.repo.find_by_id(id).await
    }

    /// Overwrite names and email of an already fetched record and persist it.
    ///
    /// An email change is rejected when another record already holds the new address.
    #[instrument(skip(self, existing, patch), fields(employee_id = existing.id))]
    pub async fn update_employee(&self, mut existing: Employee, patch: EmployeePatch) -> Result<Employee, EmployeeError> {
        if patch.email != existing.email {
            if let Some(holder) = self.repo.find_by_email(&patch.email).await? {
                if holder.id != existing.id {
                    debug!(holder_id = holder.id, "email already in use");
                    return Err(EmployeeError::DuplicateEmail(patch.email));
                }
            }
        }
        existing.apply(patch);
        let saved = self.repo.save(existing).await?;
        info!("employee_updated");
        Ok(saved)
    }

    /// Delete by id; succeeds whether or not the record existed.
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: i64) -> Result<(), EmployeeError> {
        self.repo.delete_by_id(id).await?;
        info!("employee_deleted");
        Ok(())
    }
}
