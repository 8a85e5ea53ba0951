//! Development host for the chat widget.
//!
//! Serves a test page that embeds the widget, the built widget bundle under
//! `/pkg`, and a health check. Build the bundle first with
//! `wasm-pack build widget --target web --features csr`.

mod config;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let filter = config::log_filter(std::env::var("RUST_LOG").ok().as_deref());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::DevConfig::from_env()?;
    let port = config.port;
    tracing::info!(
        pkg_dir = %config.pkg_dir.display(),
        style_dir = %config.style_dir.display(),
        position = config.widget.position.as_str(),
        "serving widget assets"
    );

    let app = routes::app(config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "chatbot dev host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
