//! HTTP handlers for static asset serving.

use axum::{
    body::Body,
    http::{Response, StatusCode, Uri},
};
use tracing::instrument;

use crate::static_assets;

/// Serve embedded static assets with SPA fallback
#[instrument]
pub async fn serve_embedded_asset(uri: Uri) -> Response<Body> {
    let mut path = uri.path().trim_start_matches('/');

    // If path is empty or ends with /, serve index.html
    if path.is_empty() || path.ends_with('/') {
        path = "index.html";
    }

    // Try to serve the requested file
    if let Some(content) = static_assets::Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        return Response::builder()
            .header(axum::http::header::CONTENT_TYPE, mime.as_ref())
            .header(axum::http::header::CACHE_CONTROL, "no-cache")
            .body(Body::from(content.data.into_owned()))
            .unwrap_or_else(|_| Response::new(Body::empty()));
    }

    // If not found, serve index.html for SPA client-side routing
    if let Some(index) = static_assets::Assets::get("index.html") {
        return Response::builder()
            .header(axum::http::header::CONTENT_TYPE, "text/html")
            .header(axum::http::header::CACHE_CONTROL, "no-cache")
            .body(Body::from(index.data.into_owned()))
            .unwrap_or_else(|_| Response::new(Body::empty()));
    }

    // If even index.html is missing, return 404
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::empty())
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    fn create_test_router() -> Router {
        Router::new().fallback(get(serve_embedded_asset))
    }

    #[tokio::test]
    async fn serve_root_returns_index_html() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").map(|v| v.to_str().unwrap()),
            Some("text/html")
        );
        let text = response.text();
        assert!(text.contains("<!doctype html>") || text.contains("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn serve_app_js_with_mime_type() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/app.js").await;

        response.assert_status(StatusCode::OK);
        assert!(response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap())
            .unwrap()
            .contains("javascript"));
    }

    #[tokio::test]
    async fn serve_stylesheet() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/styles.css").await;

        response.assert_status(StatusCode::OK);
        assert!(response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap())
            .unwrap()
            .contains("css"));
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_index() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/no/such/file").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").map(|v| v.to_str().unwrap()),
            Some("text/html")
        );
    }
}
