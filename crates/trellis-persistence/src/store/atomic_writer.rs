use std::path::Path;
use tokio::fs;
use trellis_core::TrellisResult;

/// Write-to-temp-then-rename file writer. A crash mid-save leaves the
/// previous blob intact instead of a truncated one.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TrellisResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).await?;

        // Temp file in the same directory so the rename never crosses
        // a filesystem boundary.
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    pub async fn read_all(path: &Path) -> TrellisResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");

        AtomicWriter::write_atomic(&path, b"{\"lists\":[]}")
            .await
            .unwrap();
        let data = AtomicWriter::read_all(&path).await.unwrap();
        assert_eq!(data, b"{\"lists\":[]}");
    }

    #[tokio::test]
    async fn test_overwrite_replaces_previous_blob() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");

        AtomicWriter::write_atomic(&path, b"first").await.unwrap();
        AtomicWriter::write_atomic(&path, b"second").await.unwrap();

        assert_eq!(AtomicWriter::read_all(&path).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/board.json");

        AtomicWriter::write_atomic(&path, b"x").await.unwrap();
        assert!(path.exists());
    }
}
