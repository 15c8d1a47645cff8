use std::{net::SocketAddr, sync::Arc};

use dotenvy::{dotenv, from_filename};
use tokio::{net::TcpListener, sync::watch};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    core::domain::{models::AppError, services::BlobStoreFactory},
    infrastructure::{
        adapters::services::{InMemoryBlobStoreFactory, InstanceRegistry, S3BlobStoreFactory},
        config::{AppConfig, BlobBackend},
        di::ObjectRouterModule,
        router::build_router,
    },
};

pub mod core;
pub mod infrastructure;


const REGISTRY_EVENT_CAPACITY: usize = 256;

fn load_env_for_workspace() {
    let _ = from_filename(concat!(env!("CARGO_MANIFEST_DIR"), "/.env"));
    let _ = from_filename(".env");
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();

    load_env_for_workspace();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    info!(?config, "configuration loaded");

    let blob_store_factory: Arc<dyn BlobStoreFactory> = match config.blob_backend {
        BlobBackend::S3 => Arc::new(
            S3BlobStoreFactory::new(config.request_timeout, config.s3_region.clone())
                .map_err(|e| AppError::Config(e.to_string()))?,
        ),
        BlobBackend::Memory => Arc::new(InMemoryBlobStoreFactory::new()),
    };

    let registry = Arc::new(InstanceRegistry::new(REGISTRY_EVENT_CAPACITY));
    let module = ObjectRouterModule::build(&config, registry.clone(), blob_store_factory)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let watcher = module.membership_watcher.clone();
    let watcher_task = tokio::spawn(async move { watcher.run(shutdown_rx).await });

    let app = build_router(module.app_state(registry));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));

    info!("HTTP server listening on http://{addr}");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "failed to listen for shutdown signal");
            }
            info!("shutdown signal received");
        })
        .await?;

    let _ = shutdown_tx.send(true);
    if let Err(e) = watcher_task.await {
        error!(error = %e, "membership watcher task failed");
    }

    Ok(())
}
