// HTTP server for browser-based access to the editor backend
//
// The editor frontend runs elsewhere (usually a Vite dev server) and talks
// to this API with a Bearer token.

mod auth;
pub mod routes;
pub mod state;

pub use auth::{generate_auth_token, AuthLayer};
pub use state::ServerAppState;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue,
    },
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Version information for the server
#[derive(serde::Serialize)]
struct VersionInfo {
    version: String,
    model: String,
}

/// Run the HTTP server until shutdown is requested
pub async fn run_server(
    port: u16,
    bind: &str,
    state: ServerAppState,
    cors_origins: Option<Vec<String>>,
) -> Result<(), String> {
    // CORS must be the outermost layer so preflight OPTIONS requests are
    // answered before the auth check. Explicit headers instead of Any to
    // avoid browser deprecation warnings when Authorization is present.
    let cors = match &cors_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods(Any)
                .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        }
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]),
    };

    let app = Router::new()
        .route("/api/ai/chat", post(routes::chat_handler))
        .route("/api/ai/quick-actions", get(routes::quick_actions_handler))
        .route("/api/templates", get(routes::list_templates_handler))
        .route("/api/templates/:id", get(routes::get_template_handler))
        .route("/api/version", get(version_handler))
        .route("/health", get(health_handler))
        .route("/", get(index_handler))
        .layer(AuthLayer::new(state.auth_token.clone()))
        .layer(cors)
        .with_state(state.clone());

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    let cors_display = match &cors_origins {
        Some(origins) if !origins.is_empty() => origins.join(", "),
        _ => "*".to_string(),
    };

    println!("\nExoskeleton server");
    println!("  URL:          http://{}:{}", bind, port);
    println!("  Auth token:   {}", state.auth_token);
    println!("  CORS origins: {}", cors_display);
    println!("  Model:        {}", state.client.model());
    println!();
    println!("  POST /api/ai/chat           - Formatting chat");
    println!("  GET  /api/ai/quick-actions  - Quick action catalogue");
    println!("  GET  /api/templates         - Venue templates");
    println!("  GET  /api/version           - Server version info");
    println!("  GET  /health                - Health check");
    println!();

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server listening on http://{}", addr);

    // Shutdown signal polls the shared flag set by the signal handlers
    let shutdown_state = state.shutdown_state.clone();
    let shutdown_signal = async move {
        loop {
            if shutdown_state.is_shutdown_requested() {
                log::info!("Shutdown signal received, stopping server...");
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))
}

/// Health check endpoint
async fn health_handler() -> &'static str {
    "OK"
}

/// Version endpoint
async fn version_handler(
    axum::extract::State(state): axum::extract::State<ServerAppState>,
) -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.client.model().to_string(),
    })
}

/// Index handler, shows connection instructions
async fn index_handler() -> axum::response::Html<&'static str> {
    axum::response::Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Exoskeleton</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 600px;
            margin: 50px auto;
            padding: 20px;
            background: #1a1a2e;
            color: #eee;
        }
        h1 { color: #4ade80; }
        code {
            background: #2a2a4e;
            padding: 2px 6px;
            border-radius: 4px;
            font-family: 'Monaco', 'Consolas', monospace;
        }
        .endpoint {
            background: #2a2a4e;
            padding: 10px;
            border-radius: 8px;
            margin: 10px 0;
        }
    </style>
</head>
<body>
    <h1>Exoskeleton</h1>
    <p>The formatting server is running. Point the editor at this URL with your auth token.</p>
    <h2>Endpoints</h2>
    <div class="endpoint">
        <strong>POST /api/ai/chat</strong><br>
        Formatting chat - send requests with <code>Authorization: Bearer &lt;token&gt;</code>
    </div>
    <div class="endpoint">
        <strong>GET /api/templates</strong><br>
        Venue template catalogue
    </div>
    <div class="endpoint">
        <strong>GET /health</strong><br>
        Health check endpoint
    </div>
</body>
</html>"#,
    )
}
