use clap::Parser;
use keyed_sssp::web::{start_server, ServerConfig};
use std::net::IpAddr;

/// HTTP endpoint computing shortest-path distance tables
#[derive(Parser, Debug)]
#[command(name = "web_server", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "SSSP_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, short, env = "SSSP_PORT", default_value_t = 3005)]
    port: u16,

    /// Disable the permissive CORS layer
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        enable_cors: !args.no_cors,
    };

    log::info!("configuration: {:?}", config);

    start_server(config).await?;

    Ok(())
}
