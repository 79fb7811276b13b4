use std::sync::Arc;

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

mod api;
mod config;
mod db;
mod docs;
mod model;
mod repository;
mod routes;

use config::{Config, EnvFile};
use db::init_db;
use repository::{EmployeeRepository, PgEmployeeRepository};

use crate::docs::ApiDoc;
use tracing::{error, info, warn};
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_file = EnvFile::load();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    match env_file {
        EnvFile::Loaded(path) => info!(path = %path.display(), "Loaded environment file"),
        EnvFile::Missing => warn!("No .env file found"),
        EnvFile::Invalid(e) => warn!(error = %e, "Failed to load .env file"),
    }

    info!(addr = %config.server_addr(), "Server starting...");

    let pool = match init_db(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "Failed to connect to database");
            return Err(e).context("failed to connect to database");
        }
    };
    info!("Database connection established");

    let repository: Arc<dyn EmployeeRepository> = Arc::new(PgEmployeeRepository::new(pool.clone()));
    let repository = Data::from(repository);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(repository.clone())
            .configure(routes::configure)
    })
    .bind(config.server_addr())
    .with_context(|| format!("failed to bind {}", config.server_addr()))?
    .run()
    .await?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}
