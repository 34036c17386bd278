use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use rust_embed::RustEmbed;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct Asset;

use crate::api_routes;

fn app() -> Router {
    Router::new()
        .merge(api_routes::api_routes())
        .route("/", get(index_handler))
        .route("/*file", get(static_handler))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!(%addr, "starting web UI");
    println!("Starting web UI at http://{}", addr);

    // Open browser automatically unless disabled.
    if open_browser {
        let _ = open::that(format!("http://{}", addr));
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}

async fn index_handler() -> impl IntoResponse {
    static_handler(Uri::from_static("/index.html")).await
}

// Single page, no client-side routes: unknown paths are plain 404s.
async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    match Asset::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
