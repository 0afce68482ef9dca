//! Background snapshot writer.
//!
//! Saves are fire-and-forget: `schedule` never waits for I/O. The channel
//! holds at most one pending snapshot; scheduling again before the worker
//! picks it up replaces it, so bursts of mutations collapse into one write.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::domain::snapshot::GameSnapshot;
use crate::persistence::{save_snapshot, KeyValueStore};

#[derive(Debug, Clone, Default)]
struct Pending {
    seq: u64,
    snapshot: Option<GameSnapshot>,
}

pub struct SnapshotWriter {
    pending: watch::Sender<Pending>,
    /// Highest sequence number the worker has finished attempting.
    attempted: watch::Receiver<u64>,
    next_seq: u64,
    task: JoinHandle<()>,
}

impl SnapshotWriter {
    /// Spawn the worker on the current tokio runtime.
    pub fn spawn(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (pending_tx, pending_rx) = watch::channel(Pending::default());
        let (attempted_tx, attempted_rx) = watch::channel(0u64);
        let task = tokio::spawn(run_worker(kv, key, pending_rx, attempted_tx));

        Self {
            pending: pending_tx,
            attempted: attempted_rx,
            next_seq: 0,
            task,
        }
    }

    /// Queue `snapshot` for writing, replacing any snapshot not yet picked up.
    pub fn schedule(&mut self, snapshot: GameSnapshot) {
        self.next_seq += 1;
        self.pending.send_replace(Pending {
            seq: self.next_seq,
            snapshot: Some(snapshot),
        });
    }

    /// Wait until everything scheduled so far has been attempted.
    ///
    /// Returns early if the worker is gone.
    pub async fn flush(&self) {
        let target = self.next_seq;
        let mut attempted = self.attempted.clone();
        if attempted.wait_for(|seq| *seq >= target).await.is_err() {
            warn!(target, "snapshot writer stopped before flush completed");
        }
    }

    /// Write any pending snapshot and stop the worker.
    pub async fn shutdown(self) {
        let Self { pending, task, .. } = self;
        drop(pending);
        if let Err(err) = task.await {
            error!(error = %err, "snapshot writer task failed");
        }
    }
}

async fn run_worker(
    kv: Arc<dyn KeyValueStore>,
    key: String,
    mut pending: watch::Receiver<Pending>,
    attempted: watch::Sender<u64>,
) {
    while pending.changed().await.is_ok() {
        let Pending { seq, snapshot } = pending.borrow_and_update().clone();
        let Some(snapshot) = snapshot else {
            continue;
        };

        match save_snapshot(kv.as_ref(), &key, &snapshot).await {
            Ok(()) => debug!(key = %key, seq, rounds = snapshot.rounds.len(), "game state saved"),
            Err(err) => error!(
                key = %key,
                seq,
                code = %err.code(),
                error = %err,
                "failed to save game state"
            ),
        }
        attempted.send_replace(seq);
    }
    debug!(key = %key, "snapshot writer stopped");
}
