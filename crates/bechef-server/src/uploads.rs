use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};

/// Writes uploaded files into a fixed content directory. The directory is
/// append-only: stored names are never reused or deleted.
#[derive(Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the bytes under a new name and return it for persistence on the
    /// owning record. The millisecond prefix keeps concurrent uploads from
    /// colliding while the original filename stays readable as a suffix.
    pub async fn store(&self, original_name: &str, data: &[u8]) -> io::Result<String> {
        let stored = format!("{}-{}", Utc::now().timestamp_millis(), original_name);
        tokio::fs::write(self.dir.join(&stored), data).await?;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_bytes_under_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = UploadStore::new(dir.path());

        let stored = uploads.store("dish.png", b"fake image bytes").await.unwrap();

        assert!(stored.ends_with("-dish.png"));
        let prefix = stored.strip_suffix("-dish.png").unwrap();
        assert!(prefix.parse::<i64>().is_ok());

        let written = std::fs::read(dir.path().join(&stored)).unwrap();
        assert_eq!(written, b"fake image bytes");
    }

    #[tokio::test]
    async fn fails_when_directory_is_unwritable() {
        let uploads = UploadStore::new("/nonexistent/upload/dir");
        assert!(uploads.store("x.bin", b"data").await.is_err());
    }
}
