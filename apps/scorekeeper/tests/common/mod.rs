#![allow(dead_code)]

use std::sync::Arc;

use scorekeeper::{FileKv, GameStore, StoreConfig};
use scorekeeper_test_support::unique_helpers::unique_str;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

/// File-backed store under `dir` with a fresh storage key.
pub fn file_store(dir: &std::path::Path) -> (GameStore, StoreConfig) {
    let config = StoreConfig {
        storage_key: unique_str("game"),
        data_dir: dir.to_path_buf(),
    };
    (reopen(&config), config)
}

/// Another store over the same directory and key, as after a restart.
pub fn reopen(config: &StoreConfig) -> GameStore {
    GameStore::new(Arc::new(FileKv::new(&config.data_dir)), config)
}
