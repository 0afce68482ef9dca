//! Snapshot persistence through a key-value collaborator.

pub mod file;
pub mod memory;
pub mod writer;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::GameState;
use crate::errors::persist::{PersistError, StorageError};

pub use file::FileKv;
pub use memory::MemoryKv;
pub use writer::SnapshotWriter;

/// Minimal string key-value storage the store persists through.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Read and decode the snapshot under `key`. `Ok(None)` when nothing is stored.
pub async fn load_snapshot(
    kv: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<GameState>, PersistError> {
    let Some(data) = kv.get(key).await? else {
        return Ok(None);
    };
    let state = GameSnapshot::from_json(&data)?.into_state()?;
    debug!(key, rounds = state.rounds.len(), "snapshot decoded");
    Ok(Some(state))
}

pub async fn save_snapshot(
    kv: &dyn KeyValueStore,
    key: &str,
    snapshot: &GameSnapshot,
) -> Result<(), PersistError> {
    let data = snapshot.to_json()?;
    kv.set(key, data).await?;
    Ok(())
}
