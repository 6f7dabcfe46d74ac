//! Core types for asset inlining

use std::fmt;

/// Asset class for discovery and error tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

impl AssetKind {
    /// Element name of the inline node this asset becomes
    #[must_use]
    pub fn inline_tag(self) -> &'static str {
        match self {
            AssetKind::Stylesheet => "style",
            AssetKind::Script => "script",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Stylesheet => write!(f, "stylesheet"),
            AssetKind::Script => write!(f, "script"),
        }
    }
}

/// One external resource discovered in a document
///
/// `href` is the literal attribute value as written in the markup; the
/// rewrite pass uses it to find the originating reference node again, so
/// all DOM access stays on one thread while downloads run elsewhere.
/// `resolved` is the absolute URL the fetch layer actually requests.
#[derive(Debug, Clone)]
pub struct AssetReference {
    pub kind: AssetKind,
    pub href: String,
    pub resolved: String,
}

/// Successfully fetched asset content paired with its reference
///
/// Only ever constructed from a completed download; a failed fetch
/// produces an [`InlineError`] instead, never a partially filled value.
#[derive(Debug, Clone)]
pub struct FetchedAsset {
    pub reference: AssetReference,
    pub body: String,
}

/// Error information for one failed asset
#[derive(Debug, Clone)]
pub struct InlineError {
    pub url: String,
    pub kind: AssetKind,
    pub error: String,
}

/// Result of a combine run with success and failure tracking
#[derive(Debug, Clone)]
pub struct InlineReport {
    /// The serialized combined document
    pub html: String,
    pub successes: usize,
    pub failures: Vec<InlineError>,
}

impl InlineReport {
    /// Total number of assets processed
    #[must_use]
    pub fn total(&self) -> usize {
        self.successes + self.failures.len()
    }

    /// Check if any per-asset failures occurred
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
