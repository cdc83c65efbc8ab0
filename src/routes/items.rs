//! Item routes for one API version.

use crate::handlers::items::{create, delete as delete_handler, list, read, root, update};
use crate::openapi::openapi_json;
use crate::state::AppState;
use crate::version::ApiVersion;
use axum::{routing::get, Extension, Router};

/// The canonical route table. Mounted once per version by `versioned_routes`.
pub fn item_routes(state: AppState, version: ApiVersion) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/openapi.json", get(openapi_json))
        .route("/items/", get(list).post(create))
        .route("/items/:id", get(read).put(update).delete(delete_handler))
        .layer(Extension(version))
        .with_state(state)
}
