//! Application state for the job-splitting API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayrollConfig;

/// Shared application state.
///
/// Holds the validated payroll configuration. Allocation never mutates it,
/// so every request reads the same instance.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PayrollConfig>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns a shared handle to the configuration, for work moved off the
    /// request task.
    pub fn shared_config(&self) -> Arc<PayrollConfig> {
        Arc::clone(&self.config)
    }
}
