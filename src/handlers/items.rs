//! Item CRUD handlers, shared by every API version.

use crate::error::AppError;
use crate::extractors::{ItemId, ValidJson};
use crate::model::{ItemCreate, ItemRead};
use crate::response::{created, detail, ok, Detail};
use crate::state::AppState;
use crate::version::ApiVersion;
use axum::{extract::State, response::IntoResponse, Extension, Json};

/// Informational root; the message depends on the API version.
#[utoipa::path(
    get,
    path = "/",
    tag = "items",
    responses((status = 200, description = "Application name", body = String))
)]
pub async fn root(Extension(version): Extension<ApiVersion>) -> Json<&'static str> {
    Json(version.root_message())
}

#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = ItemCreate,
    responses(
        (status = 201, description = "Item created", body = ItemRead),
        (status = 422, description = "Malformed body", body = Detail)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<ItemCreate>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .store
        .items()
        .await?
        .create(&body.name, body.description.as_deref())
        .await?;
    Ok(created(ItemRead::from(item)))
}

#[utoipa::path(
    get,
    path = "/items/",
    tag = "items",
    responses((status = 200, description = "All items", body = [ItemRead]))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state.store.items().await?.list_all().await?;
    Ok(ok(items.into_iter().map(ItemRead::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item", body = ItemRead),
        (status = 404, description = "Item not found", body = Detail)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<impl IntoResponse, AppError> {
    let item = state.store.items().await?.get_by_id(id).await?;
    Ok(ok(ItemRead::from(item)))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = ItemCreate,
    responses(
        (status = 200, description = "Updated item", body = ItemRead),
        (status = 404, description = "Item not found", body = Detail),
        (status = 422, description = "Malformed body", body = Detail)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    ValidJson(body): ValidJson<ItemCreate>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .store
        .items()
        .await?
        .update(id, &body.name, body.description.as_deref())
        .await?;
    Ok(ok(ItemRead::from(item)))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = Detail),
        (status = 404, description = "Item not found", body = Detail)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<impl IntoResponse, AppError> {
    state.store.items().await?.delete(id).await?;
    Ok(detail("Item deleted"))
}
