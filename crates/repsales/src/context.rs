//! Shared collaborators injected into every screen actor.

use crate::api::SalesApi;
use crate::fetch::FetchPolicy;
use std::sync::Arc;

/// The collaborator bundle each screen store receives at `run()` time.
///
/// Cloned once per screen; the API handle itself is shared.
#[derive(Clone)]
pub struct Backend {
    pub api: Arc<dyn SalesApi>,
    pub fetch_policy: FetchPolicy,
}

impl Backend {
    /// Bundle with the default fallback policy.
    pub fn new(api: Arc<dyn SalesApi>) -> Self {
        Self {
            api,
            fetch_policy: FetchPolicy::default(),
        }
    }

    pub fn with_policy(api: Arc<dyn SalesApi>, fetch_policy: FetchPolicy) -> Self {
        Self { api, fetch_policy }
    }
}
