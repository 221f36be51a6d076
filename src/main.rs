use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use vehicle_chatbot_backend::config::Config;
use vehicle_chatbot_backend::routes::create_router;
use vehicle_chatbot_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(&config));

    let cors = CorsLayer::very_permissive();
    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚗 Vehicle chatbot running at http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
