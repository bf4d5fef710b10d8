//! Server: reads config from env, prepares the database, serves the API.

use animal_adoption::{app, init, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("animal_adoption=info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr()?;
    let pool = init(&config).await?;
    let state = AppState::new(pool);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
