use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meetsync::config::Config;
use meetsync::services::{rooms::RoomService, votes::VoteService};
use meetsync::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meetsync=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting MeetSync web client");

    // Services talking to the scheduling backend
    let rooms = RoomService::new(&config.backend)?;
    let votes = VoteService::new(&config.backend)?;

    let state = Arc::new(AppState {
        config: config.clone(),
        rooms,
        votes,
    });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, meetsync::app(state)).await?;

    Ok(())
}
