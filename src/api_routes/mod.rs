use crate::report::SystemReport;
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

// --- Handlers ---

async fn system_report() -> impl IntoResponse {
    // Detection shells out to vendor tools; keep the blocking subprocess
    // calls off the async executor.
    match tokio::task::spawn_blocking(SystemReport::collect).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Report collection failed: {err}"),
        )
            .into_response(),
    }
}

pub fn api_routes() -> Router {
    Router::new().route("/api/system/report", get(system_report))
}
