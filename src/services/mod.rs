pub mod auth_service;
pub mod items_service;
pub mod search_service;

pub use auth_service::{AuthService, Session};
pub use items_service::ItemsService;
pub use search_service::SearchService;
