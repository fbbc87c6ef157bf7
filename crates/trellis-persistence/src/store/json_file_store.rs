use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use trellis_core::{TrellisError, TrellisResult};
use trellis_domain::Board;

use crate::migration;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::BoardStore;

/// The whole aggregate as one JSON blob at a single path, the file-system
/// analog of the browser origin's single storage key. Loading repairs what
/// it can (schema backfill) and replaces what it cannot (seeded board);
/// a malformed blob is never surfaced to the caller as an error.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn seeded(reason: &str) -> Board {
        tracing::warn!("falling back to seeded board: {reason}");
        Board::seeded()
    }
}

#[async_trait]
impl BoardStore for JsonFileStore {
    async fn load(&self) -> TrellisResult<Board> {
        if !self.path.exists() {
            tracing::info!("no board at {}, starting seeded", self.path.display());
            return Ok(Board::seeded());
        }

        let bytes = match AtomicWriter::read_all(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => return Ok(Self::seeded(&format!("unreadable file: {e}"))),
        };

        let mut value: Value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => return Ok(Self::seeded(&format!("invalid JSON: {e}"))),
        };

        if !migration::has_required_shape(&value) {
            return Ok(Self::seeded("missing lists/labels arrays"));
        }

        if migration::backfill(&mut value) {
            tracing::info!("backfilled older board schema from {}", self.path.display());
        }

        match serde_json::from_value(value) {
            Ok(board) => {
                tracing::info!("loaded board from {}", self.path.display());
                Ok(board)
            }
            Err(e) => Ok(Self::seeded(&format!("schema mismatch: {e}"))),
        }
    }

    async fn save(&self, board: &Board) -> TrellisResult<()> {
        let bytes = serde_json::to_vec_pretty(board)
            .map_err(|e| TrellisError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes).await?;
        tracing::info!("saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}
