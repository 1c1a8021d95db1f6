use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::gql::build_schema;
use api::{AppConfig, AppState, StoreBackend};
use infra::{EntityStore, InMemoryStore, PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn EntityStore> = match (config.store_backend, &config.database) {
        (StoreBackend::Postgres, Some(db_config)) => {
            let pool = infra::db::connect(db_config).await?;
            tracing::info!(
                "Connected to Postgres database {} with max {} connections",
                db_config.database,
                db_config.max_connections
            );

            if config.skip_migrations {
                tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
            } else {
                tracing::info!("Running database migrations...");
                infra::db::run_migrations(&pool).await?;
                tracing::info!("Database migrations completed successfully");
            }

            Arc::new(PgStore::new(pool))
        }
        (StoreBackend::Postgres, None) => {
            anyhow::bail!("Postgres backend selected without database configuration")
        }
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Arc::new(InMemoryStore::new())
        }
    };

    let port = config.port;
    let state = AppState::new(store, config);

    // Build GraphQL schema from the gql module
    let schema = build_schema(state.clone());

    let app = build_router(state, schema);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
