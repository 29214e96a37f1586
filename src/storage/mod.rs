pub mod photos;

pub use photos::{load_thumbnail, PhotoStore};
