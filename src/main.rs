use std::sync::Arc;

use clap::Parser;
use tower_http::cors::CorsLayer;

use autoreply_backend::config::Config;
use autoreply_backend::routes;
use autoreply_backend::services::completion::OpenAiClient;
use autoreply_backend::state::AppState;

#[derive(Parser)]
#[command(about = "Persona auto-reply backend")]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 5001)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config {
        port: cli.port,
        ..Config::default()
    };

    let completion = Arc::new(OpenAiClient::from_env()?);
    let state = Arc::new(AppState::new(config.clone(), completion));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("autoreply backend running at http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
