//! OpenAPI document for the item routes, one per API version.

use crate::handlers::items;
use crate::model::{ItemCreate, ItemRead};
use crate::response::Detail;
use crate::version::ApiVersion;
use axum::{Extension, Json};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(items::root, items::create, items::list, items::read, items::update, items::delete),
    components(schemas(ItemCreate, ItemRead, Detail)),
    tags((name = "items", description = "Item CRUD"))
)]
pub struct ApiDoc;

pub fn document(version: ApiVersion) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = version.root_message().to_string();
    doc.info.version = version.major().to_string();
    doc.servers = Some(vec![Server::new(version.prefix())]);
    doc
}

/// `GET /v{major}/openapi.json`
pub async fn openapi_json(Extension(version): Extension<ApiVersion>) -> Json<utoipa::openapi::OpenApi> {
    Json(document(version))
}
