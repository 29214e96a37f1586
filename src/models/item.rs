use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ItemModel {
    pub id: i64,
    pub item_name: String,
    pub category: Category,
    pub description: String,
    pub date_found: String,
    pub status: ItemStatus,
    pub photo_path: Option<String>,
}

/// Fixed category set. Stored as TEXT using the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Category {
    Electronics,
    Clothing,
    Accessories,
    Documents,
    Other,
}

impl Category {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Electronics" => Some(Category::Electronics),
            "Clothing" => Some(Category::Clothing),
            "Accessories" => Some(Category::Accessories),
            "Documents" => Some(Category::Documents),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::Documents => "Documents",
            Category::Other => "Other",
        }
    }
}

/// Claim lifecycle of an item. Every item is in exactly one of these
/// states; new items always start Unclaimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ItemStatus {
    Unclaimed,
    Claimed,
    Returned,
}

impl ItemStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Unclaimed" => Some(ItemStatus::Unclaimed),
            "Claimed" => Some(ItemStatus::Claimed),
            "Returned" => Some(ItemStatus::Returned),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Unclaimed => "Unclaimed",
            ItemStatus::Claimed => "Claimed",
            ItemStatus::Returned => "Returned",
        }
    }
}
