use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn test_router() -> Router {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    layered(static_routes(&manifest.join("target/site"), &manifest.join("site/style")))
}

async fn status_of(uri: &str) -> StatusCode {
    let response = test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn public_fallback_serves_files() {
    assert_eq!(status_of("/main.css").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    assert_eq!(status_of("/does-not-exist.png").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_pkg_asset_is_not_found() {
    assert_eq!(status_of("/pkg/kwikcnc.wasm").await, StatusCode::NOT_FOUND);
}
