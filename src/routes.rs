use crate::api::{employee, health};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // /ping
    cfg.service(web::resource("/ping").route(web::get().to(health::ping)))
        // /users?name=
        .service(web::resource("/users").route(web::get().to(employee::list_employees)));
}
