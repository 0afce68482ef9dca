//! Unique names for test isolation.

use ulid::Ulid;

/// `{prefix}-{ulid}`, unique per call.
///
/// ```
/// use scorekeeper_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("game");
/// assert_ne!(a, unique_str("game"));
/// assert!(a.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

