use async_trait::async_trait;
use trellis_core::TrellisResult;
use trellis_domain::Board;

/// The persistence boundary the engine talks to. The store owns fallback
/// and migration: `load` hands back a usable board for any on-disk state,
/// substituting the seeded default when the blob is absent or unreadable.
/// `save` writes the full aggregate; the engine treats failures as
/// log-and-ignore, so implementations should not retry internally.
#[async_trait]
pub trait BoardStore: Send + Sync {
    async fn load(&self) -> TrellisResult<Board>;

    async fn save(&self, board: &Board) -> TrellisResult<()>;
}
