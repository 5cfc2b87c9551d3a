use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use maud::{Markup, Render};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{debug, info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::health;
use crate::ui::{LandingPage, NotFoundPage, RootLayout};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&config));

    info!(
        name: "layout.ready",
        title = %state.layout.metadata().title,
        stylesheet = ?state.layout.stylesheet(),
        "Root layout built"
    );

    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router: pages, health, static assets.
pub fn build_router(state: AppState) -> Router {
    let timeout_duration = Duration::from_secs(state.config.server.request_timeout_secs);
    let static_dir = ServeDir::new(&state.config.assets.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health::health))
        .nest_service("/static", static_dir)
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    timeout_duration,
                    request_timeout,
                )),
        )
        .with_state(state)
}

/// Answer `408 Request Timeout` when the inner service runs past `limit`.
pub async fn request_timeout(State(limit): State<Duration>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(res) => res,
        Err(_) => {
            warn!(
                name: "request.timeout",
                path = %path,
                limit = ?limit,
                "Request timed out"
            );
            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
        }
    }
}

/// Compose page content inside the root layout.
pub fn render_document(layout: &RootLayout, page: impl Render) -> Markup {
    layout.wrap(page)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Landing page.
async fn index_handler(State(state): State<AppState>) -> Markup {
    debug!(name: "page.rendered", route = "/", "Rendering landing page");
    render_document(&state.layout, LandingPage)
}

/// Fallback - 404 page inside the root layout.
async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    debug!(name: "page.not_found", path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        render_document(&state.layout, NotFoundPage),
    )
}
