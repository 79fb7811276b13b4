use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use utoipa::ToSchema;

use crate::{
    api::error::ApiError,
    model::employee::Employee,
    repository::{EmployeeFilter, EmployeeRepository},
};

pub const EMPLOYEE_LIST_MESSAGE: &str = "data employee";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeListResponse {
    #[schema(example = "data employee")]
    pub message: String,
    pub data: Vec<Employee>,
}

impl EmployeeListResponse {
    fn new(data: Vec<Employee>) -> Self {
        Self {
            message: EMPLOYEE_LIST_MESSAGE.to_string(),
            data,
        }
    }
}

/// List employees, optionally filtered by exact name.
#[utoipa::path(
    get,
    path = "/users",
    params(
        ("name", Query, description = "Exact employee name; empty or missing lists everyone")
    ),
    responses(
        (status = 200, description = "Matching employees", body = EmployeeListResponse),
        (status = 400, description = "Query failed", body = Object, example = json!({
            "error": "pq: relation \"ms_employee\" does not exist"
        })),
        (status = 404, description = "No matching employee", body = Object, example = json!({
            "error": "employee.name tidak ditemukan"
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    repo: web::Data<dyn EmployeeRepository>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<impl Responder, ApiError> {
    // A repeated `name` is not an error: the first occurrence wins.
    let name = query
        .into_inner()
        .into_iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value);
    let filter = EmployeeFilter::from_query(name);
    debug!(name = ?filter.name(), "Fetching employees");

    let employees = repo.find_employees(&filter).await.map_err(|e| {
        error!(error = %e, name = ?filter.name(), "Failed to fetch employees");
        ApiError::from(e)
    })?;

    if employees.is_empty() {
        info!(name = ?filter.name(), "No employee matched");
        return Err(ApiError::NotFound);
    }

    debug!(count = employees.len(), "Employees fetched");
    Ok(HttpResponse::Ok().json(EmployeeListResponse::new(employees)))
}
