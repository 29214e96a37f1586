use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::{AppError, AppResult};

/// Uploaded photos live as plain files under one local directory,
/// referenced from item rows by path. The file lifecycle is independent
/// of the rows: deleting an item leaves its photo behind.
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes the upload under the file-name component of the hint.
    /// Directory components in the hint are discarded. Two uploads with
    /// the same name collide and the last write wins.
    pub fn store_photo(&self, filename_hint: &str, content: &[u8]) -> AppResult<PathBuf> {
        let file_name = Path::new(filename_hint)
            .file_name()
            .ok_or_else(|| AppError::Validation("photo filename is required".to_string()))?;

        fs::create_dir_all(&self.root)?;
        let path = self.root.join(file_name);
        fs::write(&path, content)?;

        tracing::debug!("Stored photo at {}", path.display());
        Ok(path)
    }
}

/// Loads the photo at `path` and scales it to `target_width`, keeping
/// the original aspect ratio (height = round(width * h / w)). Reads the
/// file and nothing else.
pub fn load_thumbnail(path: impl AsRef<Path>, target_width: u32) -> AppResult<DynamicImage> {
    let path = path.as_ref();

    if target_width == 0 {
        return Err(AppError::Validation("target_width must be positive".to_string()));
    }
    if !path.exists() {
        return Err(AppError::NotFound(format!("photo {}", path.display())));
    }

    let img = image::open(path)?;
    let height = (target_width as f64 * img.height() as f64 / img.width() as f64)
        .round()
        .max(1.0) as u32;

    Ok(img.resize_exact(target_width, height, FilterType::Triangle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 90, 200, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_store_then_thumbnail_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());

        let path = store.store_photo("wallet.png", &png_bytes(80, 60)).unwrap();
        let thumb = load_thumbnail(&path, 40).unwrap();
        assert_eq!(thumb.width(), 40);
        // 40 * 60 / 80
        assert_eq!(thumb.height(), 30);
    }

    #[test]
    fn test_thumbnail_rounds_height() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());

        let path = store.store_photo("strip.png", &png_bytes(3, 2)).unwrap();
        // 10 * 2 / 3 = 6.67 → 7
        let thumb = load_thumbnail(&path, 10).unwrap();
        assert_eq!(thumb.height(), 7);
    }

    #[test]
    fn test_store_discards_directory_components() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());

        let path = store
            .store_photo("../uploads/wallet.png", &png_bytes(4, 4))
            .unwrap();
        assert_eq!(path, dir.path().join("wallet.png"));
    }

    #[test]
    fn test_store_overwrites_on_same_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());

        store.store_photo("wallet.png", &png_bytes(8, 8)).unwrap();
        let path = store.store_photo("wallet.png", &png_bytes(16, 8)).unwrap();

        let thumb = load_thumbnail(&path, 8).unwrap();
        assert_eq!(thumb.height(), 4);
    }

    #[test]
    fn test_thumbnail_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        let err = load_thumbnail(&missing, 40).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_thumbnail_zero_width_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());
        let path = store.store_photo("wallet.png", &png_bytes(8, 8)).unwrap();

        let err = load_thumbnail(&path, 0).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
