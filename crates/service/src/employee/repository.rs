use async_trait::async_trait;

use super::domain::{Employee, NewEmployee};
use super::errors::EmployeeError;

/// Repository abstraction over the `employees` table.
///
/// Every operation may fail with [`EmployeeError::Storage`]. Implementations report a
/// store-level unique email violation as [`EmployeeError::DuplicateEmail`].
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new row and return it with its store-assigned id.
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, EmployeeError>;
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError>;
    /// Upsert keyed by `employee.id`.
    async fn save(&self, employee: Employee) -> Result<Employee, EmployeeError>;
    /// Remove the row if present; absent ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), EmployeeError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i64, Employee>, // key: id
        last_id: i64,
    }

    impl Table {
        fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
            self.rows.values().any(|e| e.email == email && Some(e.id) != except)
        }
    }

    #[derive(Default)]
    pub struct MockEmployeeRepository {
        table: Mutex<Table>,
        inserts: AtomicUsize,
        failing: AtomicBool,
    }

    impl MockEmployeeRepository {
        /// Make every subsequent call fail with a storage error.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        /// Number of successful inserts so far.
        pub fn insert_count(&self) -> usize {
            self.inserts.load(Ordering::SeqCst)
        }

        fn table(&self) -> Result<MutexGuard<'_, Table>, EmployeeError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(EmployeeError::Storage("connection refused".into()));
            }
            self.table.lock().map_err(|_| EmployeeError::Storage("mock table poisoned".into()))
        }
    }

    #[async_trait]
    impl EmployeeRepository for MockEmployeeRepository {
        async fn insert(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
            let mut table = self.table()?;
            if table.email_taken(&employee.email, None) {
                return Err(EmployeeError::DuplicateEmail(employee.email));
            }
            table.last_id += 1;
            let stored = Employee {
                id: table.last_id,
                first_name: employee.first_name,
                last_name: employee.last_name,
                email: employee.email,
            };
            table.rows.insert(stored.id, stored.clone());
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Ok(stored)
        }

        async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError> {
            Ok(self.table()?.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
            Ok(self.table()?.rows.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError> {
            Ok(self.table()?.rows.values().find(|e| e.email == email).cloned())
        }

        async fn save(&self, employee: Employee) -> Result<Employee, EmployeeError> {
            let mut table = self.table()?;
            if table.email_taken(&employee.email, Some(employee.id)) {
                return Err(EmployeeError::DuplicateEmail(employee.email));
            }
            table.last_id = table.last_id.max(employee.id);
            table.rows.insert(employee.id, employee.clone());
            Ok(employee)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), EmployeeError> {
            self.table()?.rows.remove(&id);
            Ok(())
        }
    }
}
