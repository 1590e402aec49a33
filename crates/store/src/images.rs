//! Uploaded product images, stored as loose files.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::StoreError;

/// Content-addressed-ish image storage: each upload gets a fresh UUID
/// filename (keeping the upload's extension) under one directory, and the
/// returned path string is what the record's `image_ref` carries.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store an uploaded image and return its reference path.
    ///
    /// The original filename only contributes its extension; the stored
    /// name is a UUID so uploads never collide.
    pub fn store(&self, bytes: &[u8], original_name: &str) -> Result<String, StoreError> {
        fs::create_dir_all(&self.dir)?;

        let file_name = match Path::new(original_name).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "stored image");
        Ok(path.to_string_lossy().into_owned())
    }

    /// Read an image back by its reference path.
    ///
    /// A reference that no longer resolves (deleted file, record imported
    /// from another machine) is `Ok(None)`; browsing must keep working
    /// without the picture.
    pub fn read(&self, image_ref: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = Path::new(image_ref);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_read_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path().join("images"));

        let image_ref = images.store(b"fake png bytes", "rasm.png").unwrap();
        assert!(image_ref.ends_with(".png"));
        assert_eq!(images.read(&image_ref).unwrap().as_deref(), Some(&b"fake png bytes"[..]));
    }

    #[test]
    fn stored_names_are_unique_per_upload() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path().join("images"));

        let first = images.store(b"a", "rasm.jpg").unwrap();
        let second = images.store(b"b", "rasm.jpg").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn extensionless_upload_still_stores() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path().join("images"));

        let image_ref = images.store(b"raw", "rasm").unwrap();
        assert!(!image_ref.ends_with('.'));
        assert_eq!(images.read(&image_ref).unwrap(), Some(b"raw".to_vec()));
    }

    #[test]
    fn dangling_reference_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path().join("images"));
        let missing = dir.path().join("images/0000.png");
        assert_eq!(images.read(&missing.to_string_lossy()).unwrap(), None);
    }
}
