//! Service layer providing the employee directory's business operations on top of models.
//! - Separates business logic from data access through the `EmployeeRepository` port.
//! - Keeps the wire-facing domain types independent of storage rows.
//! - Provides clear error types for the HTTP layer to map.

pub mod employee;
#[cfg(test)]
pub mod test_support;
