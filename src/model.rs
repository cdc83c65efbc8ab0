//! Item entity and its transfer shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `items` table. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Request body for create and update. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Item as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemRead {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemRead {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}
