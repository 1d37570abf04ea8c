//! # Finance Mock API
//!
//! In-memory HTTP service standing in for the remote endpoints the dashboard
//! calls: profile fetch and generation, recent transactions, chat and the
//! browser log sink. Nothing is persisted; restarting the server resets the
//! current profile.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use finance_domain::{profile_service, Services};
use tracing::info;
use shared::{AppConfig, Profile};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub mod io;

/// Origin of the trunk dev server serving the frontend
pub const FRONTEND_DEV_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: std::net::SocketAddr,
    pub frontend_origin: String,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: std::net::SocketAddr::from(([127, 0, 0, 1], 3000)),
            frontend_origin: FRONTEND_DEV_ORIGIN.to_string(),
            static_dir: PathBuf::from("../frontend/dist"),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
    /// Profile returned by `GET /api/profile`; replaced on every generate
    pub current_profile: Arc<Mutex<Profile>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            services: Arc::new(Services::new(config)),
            current_profile: Arc::new(Mutex::new(profile_service::fallback_profile())),
        }
    }
}

pub fn initialize_backend() -> Result<AppState> {
    info!("Setting up mock API state");
    Ok(AppState::new(AppConfig::default()))
}

pub fn create_router(app_state: AppState) -> Result<Router> {
    create_router_with(app_state, &ServerConfig::default())
}

pub fn create_router_with(app_state: AppState, config: &ServerConfig) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/profile", get(io::rest::profile_apis::get_profile))
        .route("/profile/generate", post(io::rest::profile_apis::generate_profile))
        .route("/transactions/recent", get(io::rest::transaction_apis::recent_transactions))
        .route("/chat", post(io::rest::chat_apis::chat))
        .route("/logs", post(io::rest::logging_apis::log_message));

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(app_state))
}
