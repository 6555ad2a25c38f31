mod config;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use mongodb::Client;
use mongodb::bson::doc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eventide_core::MongoEventStore;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventide_server=info,eventide_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let client = Client::with_uri_str(&config.mongo_uri)
        .await
        .context("Failed to create MongoDB client")?;
    let db = client.database(&config.mongo_db);

    // A server that cannot reach its store is useless, so refuse to start.
    db.run_command(doc! { "ping": 1 })
        .await
        .context("MongoDB connection error")?;
    info!(database = %config.mongo_db, "Connected to MongoDB");

    let state = AppState {
        store: Arc::new(MongoEventStore::new(&db)),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::pages::router())
        .merge(routes::events::router())
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("eventide-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
