//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` is a test page that embeds the widget the way a customer site would.
//! `/pkg` serves the wasm-pack output, falling back to the widget stylesheet
//! directory so `chatbot-widget.css` resolves next to the bundle.

mod dev_page;

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::DevConfig;


pub fn app(config: DevConfig) -> Router {
    let assets = ServeDir::new(&config.pkg_dir).fallback(ServeDir::new(&config.style_dir));

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

async fn index(State(config): State<Arc<DevConfig>>) -> Result<Html<String>, StatusCode> {
    dev_page::render(&config.widget).map(Html).map_err(|e| {
        tracing::error!(error = %e, "dev page render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
