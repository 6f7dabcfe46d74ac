//! Asset inlining engine
//!
//! This module provides the shared document-rewriting pass used by both
//! pipelines: replacing external stylesheet/script references with inline
//! nodes carrying the fetched content, or appending bundle-discovered
//! content to the document's head and body.

pub mod engine;
pub mod types;

// Re-exports for public API
pub use engine::{append_bundle_assets, replace_reference_nodes};
pub use types::{AssetKind, AssetReference, FetchedAsset, InlineError, InlineReport};
