use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub photo_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://lost_and_found.db".to_string()),
            photo_dir: env::var("PHOTO_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("photos")),
        }
    }
}
