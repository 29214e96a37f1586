use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{AdminCredential, Category, ItemModel, ItemStatus};

/// Allowed sort keys for item listings. The mapping to column
/// references is fixed here; callers never supply ordering text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    ItemName,
    DateFound,
}

impl SortKey {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "id" => Some(SortKey::Id),
            "item_name" => Some(SortKey::ItemName),
            "date_found" => Some(SortKey::DateFound),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::ItemName => "item_name",
            SortKey::DateFound => "date_found",
        }
    }
}

/// Durable storage for items and the admin credential. All reads and
/// writes in the crate go through here; each write is a single
/// statement, so the store is never left partially updated.
#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert_item(
        &self,
        item_name: &str,
        category: Category,
        description: &str,
        date_found: &str,
        status: ItemStatus,
        photo_path: Option<&str>,
    ) -> AppResult<ItemModel> {
        let model: ItemModel = sqlx::query_as(
            "INSERT INTO items (item_name, category, description, date_found, status, photo_path) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING id, item_name, category, description, date_found, status, photo_path",
        )
        .bind(item_name)
        .bind(category)
        .bind(description)
        .bind(date_found)
        .bind(status)
        .bind(photo_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(model)
    }

    pub async fn get_item(&self, id: i64) -> AppResult<ItemModel> {
        let model: Option<ItemModel> = sqlx::query_as(
            "SELECT id, item_name, category, description, date_found, status, photo_path \
             FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        model.ok_or_else(|| AppError::NotFound(format!("item {}", id)))
    }

    pub async fn update_status(&self, id: i64, new_status: ItemStatus) -> AppResult<()> {
        let rows_affected = sqlx::query("UPDATE items SET status = ? WHERE id = ?")
            .bind(new_status)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("item {}", id)));
        }

        Ok(())
    }

    pub async fn delete_item(&self, id: i64) -> AppResult<()> {
        let rows_affected = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("item {}", id)));
        }

        Ok(())
    }

    /// Substring match on `item_name`. SQLite LIKE is case-insensitive
    /// for ASCII; an empty needle matches every row.
    pub async fn find_by_substring(&self, text: &str) -> AppResult<Vec<ItemModel>> {
        let models: Vec<ItemModel> = sqlx::query_as(
            "SELECT id, item_name, category, description, date_found, status, photo_path \
             FROM items WHERE item_name LIKE ?",
        )
        .bind(format!("%{}%", text))
        .fetch_all(&self.pool)
        .await?;

        Ok(models)
    }

    pub async fn list_all(&self, sort_key: SortKey, ascending: bool) -> AppResult<Vec<ItemModel>> {
        let order = if ascending { "ASC" } else { "DESC" };
        let sql = format!(
            "SELECT id, item_name, category, description, date_found, status, photo_path \
             FROM items ORDER BY {} {}",
            sort_key.column(),
            order
        );

        let models: Vec<ItemModel> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(models)
    }

    pub async fn get_credential(&self) -> AppResult<AdminCredential> {
        let credential: Option<AdminCredential> =
            sqlx::query_as("SELECT username, password FROM admin LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;

        credential.ok_or_else(|| AppError::NotFound("admin credential".to_string()))
    }

    /// Replaces the single credential record. Both fields change in one
    /// statement, so the record is never half-updated.
    pub async fn set_credential(&self, username: &str, password: &str) -> AppResult<()> {
        sqlx::query("UPDATE admin SET username = ?, password = ?")
            .bind(username)
            .bind(password)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
