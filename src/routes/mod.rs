//! Router assembly: operational routes, one item API per version, and the
//! static-file fallback, wrapped in CORS, body limit and request tracing.

mod common;
mod items;

pub use common::common_routes_with_ready;
pub use items::item_routes;

use crate::config::Settings;
use crate::handlers::items::root;
use crate::state::AppState;
use crate::version::ApiVersion;
use axum::{
    extract::OriginalUri,
    response::Redirect,
    routing::{any, get},
    Extension, Router,
};
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};

/// Mount `item_routes` under `/v{major}` for every version. The version root
/// answers on both `/v{major}` and `/v{major}/`; `/v{major}/items` redirects
/// to the collection.
pub fn versioned_routes(state: AppState) -> Router {
    ApiVersion::ALL
        .into_iter()
        .fold(Router::new(), |router, version| {
            let prefix = version.prefix();
            router
                .nest(&prefix, item_routes(state.clone(), version))
                .route(&format!("{prefix}/"), get(root).layer(Extension(version)))
                .route(&format!("{prefix}/items"), any(append_slash))
        })
}

/// 307 keeps the method and body, so a POST lands on the collection too.
async fn append_slash(OriginalUri(uri): OriginalUri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::temporary(&target)
}

/// The whole application. Unmatched paths fall through to files under `settings.static_dir`.
pub fn app(state: AppState, settings: &Settings) -> Router {
    let assets = ServeDir::new(&settings.static_dir).append_index_html_on_directories(true);
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(versioned_routes(state))
        .fallback_service(assets)
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
