//! Configuration for combining operations
//!
//! One [`FuseConfig`] is shared by both pipelines. The remote pipeline applies
//! the same timeout to the primary document fetch and to every asset fetch.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::{HTTP_TIMEOUT, MAX_ASSET_SIZE};

/// Timeouts and size limits for a combine request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuseConfig {
    /// Timeout for the primary document fetch
    pub document_timeout: Duration,

    /// Timeout for each individual asset fetch
    pub asset_timeout: Duration,

    /// Maximum size for a downloaded asset (bytes)
    ///
    /// Enforced from Content-Length before the body is read, and again
    /// chunk-by-chunk while streaming. Oversized assets count as per-asset
    /// failures, never fatal errors.
    pub max_asset_size: usize,
}

impl Default for FuseConfig {
    fn default() -> Self {
        Self {
            document_timeout: HTTP_TIMEOUT,
            asset_timeout: HTTP_TIMEOUT,
            max_asset_size: MAX_ASSET_SIZE,
        }
    }
}
