pub mod pool;
pub mod schema;
pub mod store;

pub use pool::create_pool;
pub use schema::{init_schema, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
pub use store::{RecordStore, SortKey};
