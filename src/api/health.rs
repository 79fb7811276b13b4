use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// Liveness check. Does not touch the database.
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({
            "message": "pong"
        }))
    ),
    tag = "Health"
)]
pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "pong"
    }))
}
