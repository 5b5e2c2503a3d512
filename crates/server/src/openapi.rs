use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc { pub id: i64, pub first_name: String, pub last_name: String, pub email: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployeeDoc { pub first_name: String, pub last_name: String, pub email: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatchDoc { pub first_name: String, pub last_name: String, pub email: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::create,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            NewEmployeeDoc,
            EmployeePatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
