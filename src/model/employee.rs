use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of `ms_employee` as returned by the lookup endpoint.
///
/// Field order is the JSON field order. `password` is part of the response
/// shape but is never selected, so it is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Budi Santoso",
        "phoneNumber": "+6281234567890",
        "address": "Jl. Merdeka No. 1, Jakarta",
        "email": "budi@company.co.id",
        "password": "",
        "department": "Finance"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Budi Santoso")]
    pub name: String,

    #[serde(rename = "phoneNumber")]
    #[schema(example = "+6281234567890")]
    pub phone_number: String,

    #[schema(example = "Jl. Merdeka No. 1, Jakarta")]
    pub address: String,

    #[schema(example = "budi@company.co.id", format = "email")]
    pub email: String,

    #[sqlx(default)]
    #[schema(example = "")]
    pub password: String,

    #[schema(example = "Finance")]
    pub department: String,
}
