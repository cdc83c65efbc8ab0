//! Item CRUD against the `items` table.

use crate::error::AppError;
use crate::model::Item;
use crate::store::Session;

const INSERT: &str = "INSERT INTO items (name, description) VALUES (?, ?) RETURNING id, name, description";
const SELECT_ALL: &str = "SELECT id, name, description FROM items ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, description FROM items WHERE id = ?";
const UPDATE: &str =
    "UPDATE items SET name = ?, description = ? WHERE id = ? RETURNING id, name, description";
const DELETE: &str = "DELETE FROM items WHERE id = ?";

/// Repository bound to one session. Every operation consumes it, so one
/// repository is one unit of work; mutations commit before returning `Ok`.
pub struct ItemRepository {
    session: Session,
}

impl ItemRepository {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Insert a row and return it with its store-assigned id.
    pub async fn create(mut self, name: &str, description: Option<&str>) -> Result<Item, AppError> {
        tracing::debug!(sql = %INSERT, name, description = ?description, "query");
        let item = sqlx::query_as::<_, Item>(INSERT)
            .bind(name)
            .bind(description)
            .fetch_one(self.session.connection())
            .await?;
        self.session.commit().await?;
        tracing::info!(id = item.id, "item created");
        Ok(item)
    }

    /// Every item in insertion order.
    pub async fn list_all(mut self) -> Result<Vec<Item>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let items = sqlx::query_as::<_, Item>(SELECT_ALL)
            .fetch_all(self.session.connection())
            .await?;
        self.session.commit().await?;
        Ok(items)
    }

    pub async fn get_by_id(mut self, id: i64) -> Result<Item, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let item = sqlx::query_as::<_, Item>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(self.session.connection())
            .await?
            .ok_or(AppError::NotFound)?;
        self.session.commit().await?;
        Ok(item)
    }

    /// Replace name and description. The lookup and the write are one statement,
    /// so a missing row leaves nothing to commit.
    pub async fn update(
        mut self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Item, AppError> {
        tracing::debug!(sql = %UPDATE, id, name, description = ?description, "query");
        let item = sqlx::query_as::<_, Item>(UPDATE)
            .bind(name)
            .bind(description)
            .bind(id)
            .fetch_optional(self.session.connection())
            .await?
            .ok_or(AppError::NotFound)?;
        self.session.commit().await?;
        tracing::info!(id, "item updated");
        Ok(item)
    }

    pub async fn delete(mut self, id: i64) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE, id, "query");
        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(self.session.connection())
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        self.session.commit().await?;
        tracing::info!(id, "item deleted");
        Ok(())
    }
}
