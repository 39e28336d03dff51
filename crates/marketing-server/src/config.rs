use clap::Parser;

/// Server configuration, from flags or environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "marketing-server", about = "Remote MCP server for marketing tools")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "MARKETING_MCP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8787)]
    pub port: u16,
}

impl Config {
    /// The `host:port` pair to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
