use crate::db::{RecordStore, SortKey};
use crate::error::{AppError, AppResult};
use crate::models::ItemModel;

/// Query and browse operations. Sort keys arrive as caller strings and
/// are checked against the fixed [`SortKey`] mapping before any query
/// runs.
pub struct SearchService {
    store: RecordStore,
}

impl SearchService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Plain substring search on item names. An empty query matches
    /// everything; rejecting blank input is the caller's concern.
    pub async fn search(&self, query: &str) -> AppResult<Vec<ItemModel>> {
        self.store.find_by_substring(query).await
    }

    pub async fn list_sorted(&self, sort_key: &str, ascending: bool) -> AppResult<Vec<ItemModel>> {
        let key = SortKey::from_str(sort_key).ok_or_else(|| {
            AppError::InvalidArgument(format!("'{}' is not a sortable field", sort_key))
        })?;
        self.store.list_all(key, ascending).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::init_schema;
    use crate::services::ItemsService;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_service() -> SearchService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        let store = RecordStore::new(pool);

        let items = ItemsService::new(store.clone());
        items.add_item("Black Umbrella", "Other", "Left on bench", None).await.unwrap();
        items.add_item("Student ID Card", "Documents", "Card on lanyard", None).await.unwrap();
        items.add_item("Umbrella Cover", "Other", "Grey sleeve", None).await.unwrap();

        SearchService::new(store)
    }

    #[tokio::test]
    async fn test_search_substring() {
        let search = seeded_service().await;
        let hits = search.search("umbrella").await.unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|i| i.item_name.to_lowercase().contains("umbrella")));
    }

    #[tokio::test]
    async fn test_search_empty_query_matches_all() {
        let search = seeded_service().await;
        assert_eq!(search.search("").await.unwrap().len(), 3);
        assert!(search.search("xyz-no-match").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let search = seeded_service().await;
        let listed = search.list_sorted("item_name", true).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["Black Umbrella", "Student ID Card", "Umbrella Cover"]);

        let reversed = search.list_sorted("item_name", false).await.unwrap();
        assert_eq!(reversed[0].item_name, "Umbrella Cover");
    }

    #[tokio::test]
    async fn test_list_sorted_rejects_unknown_key() {
        let search = seeded_service().await;
        let err = search.list_sorted("category", true).await.unwrap_err();
        assert!(matches!(&err, AppError::InvalidArgument(msg) if msg.contains("category")));

        let err = search.list_sorted("id DESC; --", true).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }
}
