use thiserror::Error;

use models::errors::ModelError;

/// Business errors for employee workflows
#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("employee already exists with email: {0}")]
    DuplicateEmail(String),
    #[error("employee not found: {0}")]
    NotFound(i64),
    #[error("storage error: {0}")]
    Storage(String),
}

impl EmployeeError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            EmployeeError::DuplicateEmail(_) => 2001,
            EmployeeError::NotFound(_) => 2002,
            EmployeeError::Storage(_) => 2100,
        }
    }

    /// Translate a row-level failure; `email` names the value a unique violation is about.
    pub fn from_model(err: ModelError, email: &str) -> Self {
        match err {
            ModelError::Conflict(_) => EmployeeError::DuplicateEmail(email.to_string()),
            ModelError::Db(msg) => EmployeeError::Storage(msg),
        }
    }
}

impl From<ModelError> for EmployeeError {
    fn from(err: ModelError) -> Self {
        EmployeeError::Storage(err.to_string())
    }
}
