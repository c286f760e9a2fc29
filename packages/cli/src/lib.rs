// ABOUTME: Server startup and lifecycle for the todos service
// ABOUTME: Wires configuration, tracing, middleware layers, and graceful shutdown

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::net::SocketAddr;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;
use tracing_subscriber::EnvFilter;

pub mod config;


use config::Config;
use todos::{DatabaseLocation, DbState};

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = Config::from_env()?;

    println!("🚀 Starting todos server...");
    match &config.database {
        DatabaseLocation::File(path) => println!("💾 Database: {}", path.display()),
        DatabaseLocation::InMemory => println!("💾 Database: in-memory (ephemeral)"),
    }

    // Open the store once at startup; handlers receive it via router state
    let db = DbState::init(&config.database).await?;

    // The service carries no credentials, so any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let app = todos_api::create_router(db.clone())
        .layer(create_panic_handler())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("✅ Server listening on {}", addr);
    println!("📚 Available endpoints:");
    println!("   GET    /todos      - List todos");
    println!("   GET    /todos/:id  - Get one todo");
    println!("   POST   /todos      - Create a todo");
    println!("   PUT    /todos/:id  - Update a todo");
    println!("   DELETE /todos/:id  - Delete a todo");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Close the pool after in-flight requests have drained
    db.close().await;

    Ok(())
}

/// Create a panic handler that returns a consistent error response
fn create_panic_handler(
) -> CatchPanicLayer<fn(Box<dyn std::any::Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic)
}

/// Handle a handler panic with logging and a sanitized response
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    // Extract panic message safely
    let panic_message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic occurred"
    };

    error!(panic_message = %panic_message, "Handler panicked");

    // No panic detail reaches the caller
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("🛑 Shutting down...");
}
