//! Shared configuration constants for pagefuse
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

use std::time::Duration;

/// Uniform network timeout: 10 seconds
///
/// Applied to the primary document fetch and to every individual asset
/// fetch. One value on purpose: a page whose slowest asset stalls for
/// longer than this is not worth waiting for, and the per-asset timeout
/// is the only cancellation mechanism in the pipeline.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum size for a downloaded asset: 2 MB
///
/// Based on the upper range of real-world stylesheet and script payloads.
/// Typical: 50-200KB, large frameworks: 500KB-1MB.
pub const MAX_ASSET_SIZE: usize = 2 * 1024 * 1024;

/// Maximum accepted upload size for a ZIP bundle: 32 MB
pub const MAX_UPLOAD_SIZE: usize = 32 * 1024 * 1024;

/// Default bind address for the HTTP front end
///
/// Override with the `PAGEFUSE_ADDR` environment variable.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Download filename for the bundle pipeline's output artifact
pub const ZIP_DOWNLOAD_NAME: &str = "combined_from_zip.html";

/// Download filename for the URL pipeline's output artifact
pub const URL_DOWNLOAD_NAME: &str = "combined_from_url.html";

/// Chrome user agent string sent on outbound requests
///
/// Some origins serve reduced or empty stylesheets to unknown agents,
/// so asset fetches present a current-stable browser identity.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
