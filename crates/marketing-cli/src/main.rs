use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use marketing_mcp::JsonRpcResponse;

mod client;

use client::McpClient;

#[derive(Parser)]
#[command(name = "marketing", about = "Client for the marketing MCP server")]
struct Cli {
    /// Server URL
    #[arg(long, env = "MARKETING_MCP_URL", default_value = "http://localhost:8787")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the server is up
    Health,

    /// List the tools the server exposes
    ListTools,

    /// Call a tool and print its output
    Call {
        /// Tool name
        name: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}", value_parser = parse_json)]
        args: Value,
    },
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = McpClient::new(&cli.url);

    match cli.command {
        Commands::Health => {
            let health = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
        Commands::ListTools => {
            let resp = client.list_tools().await?;
            let result = into_result(resp)?;
            for tool in result["tools"].as_array().into_iter().flatten() {
                let name = tool["name"].as_str().unwrap_or_default();
                let title = tool["title"].as_str().unwrap_or_default();
                println!("{name}\t{title}");
            }
        }
        Commands::Call { name, args } => {
            let resp = client.call_tool(&name, args).await?;
            let result = into_result(resp)?;
            for block in result["content"].as_array().into_iter().flatten() {
                if let Some(text) = block["text"].as_str() {
                    println!("{text}");
                }
            }
        }
    }

    Ok(())
}

/// Unwrap a response, turning an error envelope into a CLI error.
fn into_result(resp: JsonRpcResponse) -> anyhow::Result<Value> {
    if let Some(error) = resp.error {
        let detail = error
            .data
            .as_ref()
            .and_then(|d| d["message"].as_str())
            .map(|m| format!(" ({m})"))
            .unwrap_or_default();
        anyhow::bail!("{} [{}]{detail}", error.message, error.code);
    }
    Ok(resp.result.unwrap_or(Value::Null))
}
