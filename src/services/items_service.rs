use crate::db::RecordStore;
use crate::error::{AppError, AppResult};
use crate::models::{Category, ItemModel, ItemStatus};

/// Item lifecycle rules: creation defaults, status transitions, hard
/// delete. Category and status arrive as the strings the presentation
/// layer collected and are validated against the fixed enums here.
pub struct ItemsService {
    store: RecordStore,
}

impl ItemsService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Logs a found item. `date_found` is stamped here and never
    /// changes afterwards; new items always start Unclaimed.
    pub async fn add_item(
        &self,
        name: &str,
        category: &str,
        description: &str,
        photo_path: Option<&str>,
    ) -> AppResult<ItemModel> {
        if name.is_empty() {
            return Err(AppError::Validation("item_name is required".to_string()));
        }
        let category = Category::from_str(category).ok_or_else(|| {
            AppError::Validation(format!("category '{}' is not a known category", category))
        })?;
        if description.is_empty() {
            return Err(AppError::Validation("description is required".to_string()));
        }

        let date_found = chrono::Utc::now().to_rfc3339();
        let model = self
            .store
            .insert_item(
                name,
                category,
                description,
                &date_found,
                ItemStatus::Unclaimed,
                photo_path,
            )
            .await?;

        tracing::info!("Item '{}' added with id {}", model.item_name, model.id);
        Ok(model)
    }

    pub async fn get_item(&self, item_id: i64) -> AppResult<ItemModel> {
        self.store.get_item(item_id).await
    }

    pub async fn set_status(&self, item_id: i64, new_status: &str) -> AppResult<()> {
        let status = ItemStatus::from_str(new_status).ok_or_else(|| {
            AppError::Validation(format!("status '{}' is not a known status", new_status))
        })?;

        self.store.update_status(item_id, status).await?;
        tracing::info!("Item {} status updated to '{}'", item_id, status.as_str());
        Ok(())
    }

    /// Hard delete. The photo file, if any, is left on disk; the photo
    /// directory has its own lifecycle.
    pub async fn remove_item(&self, item_id: i64) -> AppResult<()> {
        self.store.delete_item(item_id).await?;
        tracing::info!("Item {} deleted", item_id);
        Ok(())
    }
}
