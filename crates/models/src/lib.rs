//! Persistence layer: the `employees` entity, connection helpers and row-level operations.

pub mod errors;
pub mod db;
pub mod employee;

#[cfg(test)]
mod tests;
