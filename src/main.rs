use std::net::SocketAddr;
use std::sync::Arc;

use inventory_gateway::config::Config;
use inventory_gateway::db::{create_pool, InventoryStore, MySqlInventoryStore};
use inventory_gateway::middleware::CallMetricsLayer;
use inventory_gateway::proto::crud::crud_service_server::CrudServiceServer;
use inventory_gateway::proto::health::health_server::HealthServer;
use inventory_gateway::services::{CrudServiceImpl, HealthServiceImpl};

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Include file descriptor for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("crud_descriptor");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting inventory-gateway gRPC server...");
    if config.database.url.is_some() {
        tracing::info!("Connecting to database from DATABASE_URL...");
    } else {
        tracing::info!(
            "Connecting to database {}:{}/{}...",
            config.database.host,
            config.database.port,
            config.database.name
        );
    }

    // An unreachable database aborts startup
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection established");

    let store: Arc<dyn InventoryStore> = Arc::new(MySqlInventoryStore::new(pool));

    let crud_service = CrudServiceImpl::new(store.clone());
    let health_service = HealthServiceImpl::new(store);

    // CORS layer for gRPC-Web
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any);

    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(TraceLayer::new_for_grpc())
        .layer(CallMetricsLayer::new())
        .layer(cors)
        .layer(tonic_web::GrpcWebLayer::new())
        .add_service(reflection_service)
        .add_service(CrudServiceServer::new(crud_service))
        .add_service(HealthServer::new(health_service))
        .serve(addr)
        .await?;

    Ok(())
}
