//! Storefront configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Storefront configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Number of items shown in the featured region (K)
    pub featured_count: usize,
    /// Size of the price-ranked candidate pool drawn from the catalog
    pub candidate_pool_size: usize,
    /// Milliseconds between full featured-set rotations
    pub rotation_interval_ms: u64,
    /// Character limit for compact-card descriptions
    pub truncation_length: usize,
}

impl StorefrontConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With featured-set size
    #[inline]
    #[must_use]
    pub fn with_featured_count(mut self, count: usize) -> Self {
        self.featured_count = count;
        self
    }

    /// With candidate pool size
    #[inline]
    #[must_use]
    pub fn with_candidate_pool_size(mut self, size: usize) -> Self {
        self.candidate_pool_size = size;
        self
    }

    /// With rotation interval in milliseconds
    #[inline]
    #[must_use]
    pub fn with_rotation_interval_ms(mut self, ms: u64) -> Self {
        self.rotation_interval_ms = ms;
        self
    }

    /// With description truncation length
    #[inline]
    #[must_use]
    pub fn with_truncation_length(mut self, length: usize) -> Self {
        self.truncation_length = length;
        self
    }

    /// Rotation interval as a `Duration`
    #[inline]
    #[must_use]
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            featured_count: 5,
            candidate_pool_size: 300,
            rotation_interval_ms: 30_000,
            truncation_length: 260,
        }
    }
}
