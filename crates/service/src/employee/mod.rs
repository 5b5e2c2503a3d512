//! Employee module: three-layer architecture (domain, repository, service).
//!
//! The service owns the email-uniqueness rule; repositories only move rows.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Employee, EmployeePatch, NewEmployee};
pub use errors::EmployeeError;
pub use repository::EmployeeRepository;
pub use service::EmployeeService;
