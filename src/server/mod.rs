//! HTTP server.
//!
//! Serves the page views over axum, plus a handful of auxiliary endpoints:
//!
//! - `GET /`, `/portfolio`, `/project/{slug}`, `/about`, `/certificates`, `/contact`
//! - `POST /contact`: contact form submission
//! - `POST /theme`: toggle the persisted light/dark preference
//! - `GET /health`, `GET /api/projects`, `GET /api/projects/{slug}`
//! - `/assets/*`: the bundled stylesheet, or static files from the configured
//!   assets directory
//!
//! Everything else soft-renders the not-found page.

mod error;
mod handlers;

pub use error::AppError;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::catalog::Catalog;
use crate::config::FolioConfig;
use crate::contact::{ContactFlow, EmailDelivery, delivery_from_settings};
use crate::error::{FolioError, Result};
use crate::theme::ThemeMode;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub contact: Arc<ContactFlow>,
    pub default_theme: ThemeMode,
    pub assets_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(catalog: Catalog, delivery: Arc<dyn EmailDelivery>, recipient: Option<String>) -> Self {
        let recipient = recipient.unwrap_or_else(|| catalog.profile().name.clone());
        Self {
            catalog: Arc::new(catalog),
            contact: Arc::new(ContactFlow::new(delivery, recipient)),
            default_theme: ThemeMode::default(),
            assets_dir: None,
        }
    }

    pub fn with_default_theme(mut self, theme: ThemeMode) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn with_assets_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.assets_dir = dir;
        self
    }

    /// Builds the state from configuration: loads and validates the catalog
    /// and wires up the email-delivery collaborator.
    pub fn from_config(config: &FolioConfig, project_root: &Path) -> Result<Self> {
        let catalog = Catalog::load_or_builtin(config.content_path(project_root).as_deref())?;
        tracing::info!(
            projects = catalog.list_projects().len(),
            skills = catalog.list_skills().len(),
            certificates = catalog.list_certificates().len(),
            "Catalog ready"
        );

        let delivery = delivery_from_settings(&config.contact);
        Ok(
            Self::new(catalog, delivery, config.contact.recipient_name.clone())
                .with_default_theme(config.theme.default)
                .with_assets_dir(config.assets_path(project_root)),
        )
    }
}

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::page))
        .route("/portfolio", get(handlers::portfolio))
        .route("/project/{slug}", get(handlers::project))
        .route("/about", get(handlers::page))
        .route("/certificates", get(handlers::page))
        .route(
            "/contact",
            get(handlers::page).post(handlers::submit_contact),
        )
        .route("/theme", post(handlers::toggle_theme))
        .route("/health", get(handlers::health))
        .route("/api/projects", get(handlers::api_projects))
        .route("/api/projects/{slug}", get(handlers::api_project));

    // A configured directory shadows the bundled files.
    let bundled = handlers::bundled_asset.into_service();
    router = match state.assets_dir {
        Some(ref dir) => router.nest_service("/assets", ServeDir::new(dir).fallback(bundled)),
        None => router.nest_service("/assets", bundled),
    };

    router
        .fallback(handlers::page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(address = %local, "Serving portfolio");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(FolioError::Io)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
