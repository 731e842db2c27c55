use catalog_service::config::{ServiceConfig, DEFAULT_LOG_FILTER};
use catalog_service::models::catalog::{BuiltinCatalog, Catalog, CatalogSource, JsonFileCatalog};
use catalog_service::routes::router;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let source: Box<dyn CatalogSource + Send + Sync> = match &config.catalog_path {
        Some(path) => {
            info!("Using JSON catalog at {}", path.display());
            Box::new(JsonFileCatalog::new(path.clone()))
        }
        None => {
            info!("Using built-in catalog");
            Box::new(BuiltinCatalog)
        }
    };

    let catalog = match Catalog::load(source.as_ref()).await {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    let app = router(catalog, &config.cors_origins);

    let addr = config.socket_addr();
    info!("Catalog service starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
