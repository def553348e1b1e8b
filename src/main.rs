use std::io;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menu_catalog::app::{self, AppServices};
use menu_catalog::config::{database, Config, LogFormat, StoreBackend};
use menu_catalog::core::AppError;
use menu_catalog::middleware::{route_not_found, ErrorHandler, RequestId};
use menu_catalog::CatalogStore;

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("menu_catalog={},actix_web=info", log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn build_store(config: &Config) -> Result<CatalogStore, AppError> {
    match (config.store, &config.database) {
        (StoreBackend::MySql, Some(db)) => {
            let pool = db.create_pool().await?;
            tracing::info!(
                "Database pool initialized ({} connections)",
                db.max_connections
            );
            database::run_migrations(&pool).await?;
            Ok(CatalogStore::mysql(pool))
        }
        (StoreBackend::MySql, None) => Err(AppError::Configuration(
            "DATABASE_URL is required for the mysql store".to_string(),
        )),
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory catalog store; data is lost on restart");
            Ok(CatalogStore::in_memory())
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(io::Error::other)?;
    init_tracing(&config.app.log_level, config.app.log_format);
    config.validate().map_err(io::Error::other)?;

    tracing::info!("Starting Menu Catalog API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let store = build_store(&config).await.map_err(io::Error::other)?;
    let services = AppServices::new(store);
    let expose_details = !config.app.is_production();
    let cors = config.cors.clone();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(ErrorHandler::new(expose_details))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(app::cors(&cors))
            .configure(move |cfg| services.configure(cfg))
            .default_service(web::to(route_not_found))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
