//! Error handling for the score keeper.

pub mod config;
pub mod domain;
pub mod error_code;
pub mod persist;

pub use config::ConfigError;
pub use domain::{RoundError, SubmitError};
pub use error_code::ErrorCode;
pub use persist::{PersistError, StorageError};
