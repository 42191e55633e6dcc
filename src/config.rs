//! Configuration for the bundled in-memory substrate
//!
//! Centralized configuration with sensible defaults.

/// Configuration for [`MemoryStore`](crate::MemoryStore)
#[derive(Debug, Clone)]
pub struct MemoryConfig {
    // -------------------------------------------------------------------------
    // Quota Configuration
    // -------------------------------------------------------------------------
    /// Byte quota across all slots, counted as key bytes + value bytes.
    /// `None` means unlimited.
    ///
    /// Writes that would exceed the quota fail with
    /// [`StashError::QuotaExceeded`](crate::StashError::QuotaExceeded) and
    /// leave the substrate unchanged.
    pub quota_bytes: Option<usize>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { quota_bytes: None }
    }
}

impl MemoryConfig {
    /// Create a new config builder
    pub fn builder() -> MemoryConfigBuilder {
        MemoryConfigBuilder::default()
    }
}

/// Builder for MemoryConfig
#[derive(Default)]
pub struct MemoryConfigBuilder {
    config: MemoryConfig,
}

impl MemoryConfigBuilder {
    /// Set the byte quota (key bytes + value bytes across all slots)
    pub fn quota_bytes(mut self, quota: usize) -> Self {
        self.config.quota_bytes = Some(quota);
        self
    }

    pub fn build(self) -> MemoryConfig {
        self.config
    }
}
