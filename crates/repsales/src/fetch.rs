//! Bulk-read recovery policy.
//!
//! A screen load either substitutes the fixed sample set when the backend
//! cannot deliver (the default, so the UI always has something to render) or
//! propagates the failure, depending on the caller's policy.

use crate::api::ApiError;
use tracing::warn;

/// What a screen does when a bulk read fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Substitute the fixed sample set and carry a notice for the UI banner.
    #[default]
    Fallback,
    /// Surface the error to the caller.
    Propagate,
}

/// A loaded base collection plus the non-fatal notice that came with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    /// Set when the records are the fallback sample set rather than live data.
    pub notice: Option<String>,
}

impl<T> Loaded<T> {
    pub fn live(records: Vec<T>) -> Self {
        Self {
            records,
            notice: None,
        }
    }
}

/// Applies the recovery policy to a bulk-read outcome.
///
/// Only errors that leave the client with nothing to show are recovered (see
/// [`ApiError::is_recoverable`]); a malformed response propagates under
/// either policy.
pub fn resolve<T>(
    entity: &str,
    outcome: Result<Vec<T>, ApiError>,
    policy: FetchPolicy,
    fallback: impl FnOnce() -> Vec<T>,
) -> Result<Loaded<T>, ApiError> {
    match outcome {
        Ok(records) => Ok(Loaded::live(records)),
        Err(e) if policy == FetchPolicy::Fallback && e.is_recoverable() => {
            warn!(entity, error = %e, "Fetch failed, serving sample data");
            Ok(Loaded {
                records: fallback(),
                notice: Some(format!("Showing sample data: {e}")),
            })
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_data_carries_no_notice() {
        let loaded = resolve("tasks", Ok(vec![1, 2, 3]), FetchPolicy::Fallback, Vec::new).unwrap();
        assert_eq!(loaded.records, vec![1, 2, 3]);
        assert!(loaded.notice.is_none());
    }

    #[test]
    fn recoverable_errors_fall_back_with_a_notice() {
        let loaded = resolve(
            "tasks",
            Err(ApiError::Network("connection refused".into())),
            FetchPolicy::Fallback,
            || vec![7],
        )
        .unwrap();
        assert_eq!(loaded.records, vec![7]);
        assert!(loaded.notice.unwrap().contains("connection refused"));
    }

    #[test]
    fn propagate_policy_raises() {
        let result: Result<Loaded<i32>, ApiError> = resolve(
            "tasks",
            Err(ApiError::Network("connection refused".into())),
            FetchPolicy::Propagate,
            || vec![7],
        );
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn malformed_responses_never_fall_back() {
        let result: Result<Loaded<i32>, ApiError> = resolve(
            "tasks",
            Err(ApiError::Decode("expected a list".into())),
            FetchPolicy::Fallback,
            || vec![7],
        );
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
