//! HTTP server: JSON API plus server-rendered pages

mod api;
mod error;
mod views;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::MarkdownRenderer;
use crate::store::MemStorage;
use crate::Folio;

pub use api::CommentRequest;
pub use error::ApiError;

/// Server state shared by all handlers
pub struct ServerState {
    pub store: Arc<MemStorage>,
    pub config: SiteConfig,
    pub renderer: MarkdownRenderer,
    /// Directory served for unmatched paths
    pub static_dir: Option<PathBuf>,
}

impl ServerState {
    pub fn new(folio: &Folio) -> Self {
        let static_dir = folio
            .config
            .static_dir
            .as_ref()
            .map(|dir| folio.base_dir.join(dir))
            .filter(|dir| dir.is_dir());

        Self {
            store: Arc::clone(&folio.store),
            config: folio.config.clone(),
            renderer: MarkdownRenderer::new(),
            static_dir,
        }
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    let app = Router::new()
        .route("/api/posts", get(api::list_posts).post(api::create_post))
        .route(
            "/api/posts/:id",
            get(api::get_post)
                .patch(api::update_post)
                .put(api::update_post)
                .delete(api::delete_post),
        )
        .route(
            "/api/posts/:id/comments",
            get(api::list_comments).post(api::create_comment),
        )
        .route("/api/preview", post(api::preview))
        .route("/api/health", get(api::health))
        .route("/", get(views::home))
        .route("/post/:id", get(views::post_page))
        .route("/post/:id/comments", post(views::submit_comment));

    let app = match &state.static_dir {
        Some(dir) => {
            tracing::debug!("Serving static files from {:?}", dir);
            app.fallback_service(ServeDir::new(dir))
        }
        None => app.fallback(views::not_found),
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Start the blog server
pub async fn start(folio: &Folio) -> Result<()> {
    let state = Arc::new(ServerState::new(folio));
    let app = router(state);

    let addr: SocketAddr = folio.config.bind_addr().parse()?;
    let url = format!("http://{}:{}", folio.config.ip, folio.config.port);

    let stats = folio.store.stats();
    tracing::info!(
        "Loaded {} posts ({} drafts) and {} comments",
        stats.posts,
        stats.drafts,
        stats.comments
    );
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
