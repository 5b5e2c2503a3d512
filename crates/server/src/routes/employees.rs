use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use service::employee::{Employee, EmployeeError, EmployeePatch, NewEmployee};

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    post, path = "/api/employees", tag = "employees",
    request_body = crate::openapi::NewEmployeeDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), JsonApiError> {
    let created = state.employees.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/employees", tag = "employees",
    responses(
        (status = 200, description = "All employees", body = [crate::openapi::EmployeeDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Employee>>, JsonApiError> {
    let all = state.employees.list_employees().await?;
    info!(count = all.len(), "list employees");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, JsonApiError> {
    let found = state.employees.get_employee(id).await?.ok_or(EmployeeError::NotFound(id))?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = crate::openapi::EmployeePatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Email held by another employee")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(patch): Json<EmployeePatch>,
) -> Result<Json<Employee>, JsonApiError> {
    let existing = state.employees.get_employee(id).await?.ok_or(EmployeeError::NotFound(id))?;
    let updated = state.employees.update_employee(existing, patch).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Deleted, also when the id did not exist", body = String)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<String, JsonApiError> {
    state.employees.delete_employee(id).await?;
    Ok(format!("Deleted employee with id: {id}"))
}
