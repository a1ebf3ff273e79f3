//! Documentation of the local business dashboard API.
//!
//!
//!
//! # General Infrastructure
//! - Frontend talks to this server directly over HTTP/JSON
//! - Any origin is allowed, the frontend may be served from anywhere
//! - No database, no cache, no external calls
//! - Every response is generated on the spot and forgotten
//!
//!
//!
//! # Endpoints
//!
//! | Method | Path | Input | Output |
//! |---|---|---|---|
//! | GET | `/health` | | `{status, message}` |
//! | POST | `/business-data` | JSON `{name, location}` | `{rating, reviews, headline}` |
//! | GET | `/regenerate-headline` | `?name=..&location=..` | `{headline}` |
//!
//! Anything else, wrong methods included, is a 404. Failures always carry `{error}`.
//!
//!
//!
//! # Simulated Latency
//!
//! Business data waits 500ms before answering, headlines 300ms. Both are plain
//! tokio timers so a waiting request never holds up another one.
//!
//!
//!
//! # Setup
//!
//! Run locally.
//! ```sh
//! RUST_LOG=info cargo run -p dashboard
//! ```
//!
//! Different port.
//! ```sh
//! PORT=8080 cargo run -p dashboard
//! ```
//!
//! Check it is up.
//! ```sh
//! curl http://localhost:3001/health
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod headlines;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use error::ServerError;
use routes::{
    business_data_handler, health_handler, not_found_handler, panic_handler,
    regenerate_headline_handler,
};
use state::State;

pub async fn start_server() -> Result<(), ServerError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let state = State::new(Config::load()?);

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.map_err(|e| {
        error!("Failed to bind {address}: {e}");
        e
    })?;
    info!("Business Dashboard API is running on port {}", state.config.port);
    info!("Health check: http://localhost:{}/health", state.config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health_handler).fallback(not_found_handler))
        .route(
            "/business-data",
            post(business_data_handler).fallback(not_found_handler),
        )
        .route(
            "/regenerate-headline",
            get(regenerate_headline_handler).fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(panic_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => error!("Failed to install Ctrl+C handler: {e}"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
