//! Application state for the Hearing Scheduling Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded calendar policy.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calendar configuration.
    config: Arc<PolicyLoader>,
}

impl AppState {
    /// Creates a new application state with the given policy loader.
    pub fn new(config: PolicyLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the policy loader.
    pub fn config(&self) -> &PolicyLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
