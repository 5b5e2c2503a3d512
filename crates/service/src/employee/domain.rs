use serde::{Deserialize, Serialize};

/// Stored employee as exposed on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Create input: an employee before the store has assigned an id.
/// A client-supplied `id` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Update input: replaces every field but the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// Overwrite the mutable fields in place; `id` is untouched.
    pub fn apply(&mut self, patch: EmployeePatch) {
        self.first_name = patch.first_name;
        self.last_name = patch.last_name;
        self.email = patch.email;
    }
}

impl From<models::employee::Model> for Employee {
    fn from(row: models::employee::Model) -> Self {
        Self { id: row.id, first_name: row.first_name, last_name: row.last_name, email: row.email }
    }
}

impl From<Employee> for models::employee::Model {
    fn from(e: Employee) -> Self {
        Self { id: e.id, first_name: e.first_name, last_name: e.last_name, email: e.email }
    }
}
