use crate::api::employee::EmployeeListResponse;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Lookup API",
        version = "0.1.0",
        description = r#"
Read-only lookup over the `ms_employee` table.

- `GET /ping` health check
- `GET /users` lists employees, optionally filtered by exact `name`

Errors are returned as `{"error": "..."}`.
"#,
    ),
    paths(
        crate::api::health::ping,
        crate::api::employee::list_employees
    ),
    components(
        schemas(
            Employee,
            EmployeeListResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Employee", description = "Employee lookup"),
    )
)]
pub struct ApiDoc;
