//! Backend synchronization interface
//!
//! Remote persistence is a placeholder: the store calls a backend
//! opportunistically and never assumes one is available. The shipped
//! implementation only logs.

use logger::info;

use crate::core::storage::PathEntries;

/// External service that can hold per-path progress
pub trait ProgressBackend {
    /// Upload the full per-node mapping for one path
    ///
    /// # Errors
    /// Returns an error when the backend rejects or cannot take the data
    fn push(&self, path_slug: &str, entries: &PathEntries) -> Result<(), String>;

    /// Download the per-node mapping for one path
    ///
    /// `Ok(None)` means the backend is reachable but has nothing stored.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be queried
    fn pull(&self, path_slug: &str) -> Result<Option<PathEntries>, String>;
}

/// Log-only stand-in for a future remote backend
///
/// Push logs and reports success; pull always reports no data.
#[derive(Debug, Clone, Default)]
pub struct LogOnlyBackend {
    /// Configured endpoint, shown in logs only
    pub endpoint: String,
}

impl LogOnlyBackend {
    /// Create a stub backend for the configured endpoint
    #[must_use]
    pub const fn new(endpoint: String) -> Self {
        Self { endpoint }
    }
}

impl ProgressBackend for LogOnlyBackend {
    fn push(&self, path_slug: &str, entries: &PathEntries) -> Result<(), String> {
        info!(
            "Would sync {} entries for {path_slug} to {}",
            entries.len(),
            if self.endpoint.is_empty() {
                "(no endpoint configured)"
            } else {
                &self.endpoint
            }
        );
        Ok(())
    }

    fn pull(&self, path_slug: &str) -> Result<Option<PathEntries>, String> {
        info!("Would load progress for {path_slug} from backend");
        Ok(None)
    }
}
