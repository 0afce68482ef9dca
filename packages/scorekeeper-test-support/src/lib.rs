//! Shared helpers for the score keeper's integration tests.

pub mod logging;
pub mod proptest_prelude;
pub mod unique_helpers;
