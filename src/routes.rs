//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the editor: Leptos SSR renders the shell at `/`,
//! `/pkg` serves the wasm/JS/CSS bundle, and `/healthz` answers probes. Any
//! other path falls back to the shell so client-side navigation can reload.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Routes that do not depend on Leptos.
fn static_routes(pkg_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
}

/// Full application router: static routes, Leptos SSR, history fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &Config) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let mut leptos_options = conf.leptos_options;

    // `/pkg` and the fallback file handler must read the same directory.
    let site_root = config.resolve_site_root(&leptos_options.site_root);
    let pkg_dir = site_root.join(&*leptos_options.site_pkg_dir);
    leptos_options.site_root = site_root.to_string_lossy().into_owned().into();
    tracing::debug!(pkg_dir = %pkg_dir.display(), "serving site assets");
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    Ok(static_routes(&pkg_dir)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
