//! hia CLI - backend for the Hearts in Action site
//!
//! Usage:
//!   hia serve                         # Serve the API on 127.0.0.1:3030
//!   hia serve --port 8080 --debug     # Custom port with debug logging
//!   RUST_LOG=hia_server=debug hia serve  # Fine-grained log control
//!
//! Environment variables (loaded from .env when present):
//!   STRIPE_SECRET_KEY                 # Required: Stripe API key
//!   OPENAI_API_KEY                    # Required: OpenAI API key
//!   RUST_LOG                          # Log filter (default: info)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hia_core::MemStore;
use hia_server::clients::{AssistantClient, StripeClient};
use hia_server::{AppState, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "hia", version, about = "Hearts in Action site backend")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 3030)]
    port: u16,

    /// Directory with the built front-end bundle, served as a fallback
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Allow any CORS origin (development only)
    #[arg(long)]
    cors_permissive: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        // Debug mode: set debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let stripe_key =
        std::env::var("STRIPE_SECRET_KEY").context("STRIPE_SECRET_KEY not set")?;
    let openai_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;

    let stripe = StripeClient::new(stripe_key).context("invalid Stripe configuration")?;
    let assistant =
        AssistantClient::new(openai_key).context("invalid OpenAI configuration")?;

    // One store for the process lifetime; all records are gone on restart.
    let store = Arc::new(MemStore::new());
    let state = AppState::new(store, stripe, assistant);

    let bind_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port")?;
    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
        static_dir: args.static_dir,
    };

    hia_server::serve(state, config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    match cli.command {
        Command::Serve(args) => run_serve(args).await,
    }
}
