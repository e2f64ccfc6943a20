use clap::Parser;
use std::path::PathBuf;

use exoskeleton_lib::config::ServerConfig;
use exoskeleton_lib::generation::GenerationClient;
use exoskeleton_lib::server::{self, generate_auth_token, ServerAppState};
use exoskeleton_lib::shutdown::{self, ShutdownHandler, ShutdownResult};

/// Origins the editor dev server is served from
const DEV_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

/// Exoskeleton - AI formatting backend for the browser LaTeX editor
#[derive(Parser, Debug)]
#[command(name = "exoskeleton")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to bind the server to (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind the server to (overrides the config file)
    #[arg(long)]
    bind: Option<String>,

    /// Fixed auth token (or set EXOSKELETON_SERVER_TOKEN env var)
    /// If not provided, a random token is generated on each startup
    #[arg(long, env = "EXOSKELETON_SERVER_TOKEN")]
    token: Option<String>,

    /// API key for the generation service (or set GEMINI_API_KEY env var)
    #[arg(long, env = "GEMINI_API_KEY")]
    api_key: Option<String>,

    /// Path to the config file (defaults to ~/.exoskeleton/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    env_logger::init();

    let config = match &cli.config {
        Some(path) => ServerConfig::load_from(path),
        None => ServerConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let api_key = match cli.api_key.or_else(|| config.generation.api_key.clone()) {
        Some(key) => key,
        None => {
            eprintln!("Error: no API key configured.");
            eprintln!("Set GEMINI_API_KEY or add api_key to ~/.exoskeleton/config.toml");
            std::process::exit(1);
        }
    };

    let port = cli.port.unwrap_or(config.server.port);
    let bind = cli.bind.unwrap_or_else(|| config.server.host.clone());

    let client = GenerationClient::new(api_key)
        .with_endpoint(&config.generation.endpoint)
        .with_model(&config.generation.model)
        .with_timeout_secs(config.generation.timeout_secs);

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let shutdown_state = shutdown::ShutdownState::new();
        if let Err(e) = shutdown::register_signal_handlers(shutdown_state.clone()) {
            log::warn!("Failed to register signal handlers: {}", e);
        }

        let auth_token = cli.token.unwrap_or_else(generate_auth_token);

        let state = ServerAppState::new(auth_token, client, shutdown_state.clone());

        let mut origins: Vec<String> = DEV_ORIGINS.iter().map(|s| s.to_string()).collect();
        origins.extend(config.server.allowed_origins.iter().cloned());

        if let Err(e) = server::run_server(port, &bind, state.clone(), Some(origins)).await {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }

        // Conversations are in-memory only; report what was open and exit
        let sessions_closed = state.session_count();
        let handler = ShutdownHandler::with_state(shutdown_state);
        if let Err(e) = handler.handle_shutdown(|| {
            Ok(ShutdownResult {
                sessions_closed,
                errors: Vec::new(),
            })
        }) {
            log::warn!("Shutdown cleanup failed: {}", e);
        }
    });
}
