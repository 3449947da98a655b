//! Axum-based gateway for the portfolio site: chat proxy, optional emotion endpoint,
//! and the built site bundle. Config-driven via CoreConfig.

mod error;
mod handlers;

use axum::{
    extract::State,
    http::Method,
    routing::{get, post},
    Json, Router,
};
use folio_core::{ChatResponder, CoreConfig, EmotionClassifier};
use folio_skills::{build_classifier, build_responder};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) responder: Arc<dyn ChatResponder>,
    pub(crate) classifier: Option<Arc<dyn EmotionClassifier>>,
}

/// Pre-flight check: config loads, the responder can be built (credential present),
/// the classifier command is sane, and the port is free.
fn run_verify() -> Result<(), String> {
    print!("Loading config... ");
    let config = CoreConfig::load().map_err(|e| e.to_string())?;
    println!("OK ({})", config.app_name);

    print!("Building {} responder... ", config.responder_mode);
    let responder = build_responder(&config).map_err(|e| format!("responder setup failed: {}", e))?;
    println!("OK ({})", responder.name());

    print!("Checking emotion classifier... ");
    match build_classifier(&config).map_err(|e| format!("classifier setup failed: {}", e))? {
        Some(classifier) => println!("OK ({})", classifier.name()),
        None => println!("disabled"),
    }

    let port = config.port;
    print!("Checking port {}... ", port);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => return Err(format!("Port {} BLOCKED: {}", port, e)),
    }

    println!("\nAll checks passed. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[folio-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = match build_state() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], state.config.port));
    tracing::info!(
        app = %state.config.app_name,
        responder = state.responder.name(),
        emotion = state.classifier.is_some(),
        "folio-gateway listening on {}",
        addr
    );
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, build_app(state)).await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}

fn build_state() -> Result<AppState, folio_core::SetupError> {
    let config = CoreConfig::load()?;
    let responder = build_responder(&config)?;
    let classifier = build_classifier(&config)?;
    Ok(AppState {
        config: Arc::new(config),
        responder,
        classifier,
    })
}

fn frontend_root_dir(config: &CoreConfig) -> PathBuf {
    let dir = PathBuf::from(&config.frontend_dir);
    if dir.is_absolute() {
        return dir;
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(dir)
}

fn build_app(state: AppState) -> Router {
    let frontend = state
        .config
        .frontend_enabled
        .then(|| frontend_root_dir(&state.config));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let mut api: Router<AppState> = Router::new()
        .route("/api/health", get(health))
        .route("/api/chat", post(handlers::chat));

    if let Some(classifier) = state.classifier.clone() {
        api = api.merge(
            Router::new()
                .route("/api/emotion", post(handlers::emotion))
                .with_state::<AppState>(classifier),
        );
    }

    let mut app = api.with_state(state);

    if let Some(frontend_dir) = frontend {
        // `/` -> index.html, everything else that is not an API route -> the bundle.
        app = app
            .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
            .fallback_service(ServeDir::new(frontend_dir));
    }

    app.layer(cors)
}

/// GET /api/health – liveness check and active strategy.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "responder": state.config.responder_mode.as_str(),
        "emotion": state.classifier.is_some(),
    }))
}
