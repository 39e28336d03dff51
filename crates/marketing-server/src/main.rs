use clap::Parser;
use tracing_subscriber::EnvFilter;

use marketing_mcp::ToolRegistry;
use marketing_server::app_state::AppState;
use marketing_server::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let registry = ToolRegistry::builtin();
    tracing::info!(tools = registry.len(), "tool registry loaded");

    let app = marketing_server::router::create_router(AppState::new(registry));

    let addr = config.addr();
    tracing::info!("Remote MCP server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
