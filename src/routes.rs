//! Router assembly.
//!
//! The landing page is rendered by Leptos SSR at `/`. Compiled WASM, JS and
//! CSS live under `<site_root>/pkg`, and anything the app does not route
//! falls through to the public directory (story images and the like).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Full application router: SSR pages plus static assets.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = Arc::from(root.to_string_lossy().as_ref());
    }
    let site_root = leptos_options.site_root.to_string();
    tracing::info!(site_root = %site_root, public_dir = %config.public_dir.display(), "serving site");

    let routes = generate_route_list(site::app::App);
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(layered(static_routes(Path::new(&site_root), &config.public_dir).merge(leptos_router)))
}

/// Health check, `/pkg` assets and the public-directory fallback.
fn static_routes(site_root: &Path, public_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(public_dir))
}

fn layered(router: Router) -> Router {
    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
