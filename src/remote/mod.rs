//! Remote pipeline: URL resolution, concurrent asset fetching
//!
//! One sequential document fetch, a reference scan, then a concurrent
//! fan-out of asset downloads fanned back in before the inlining engine
//! mutates anything.

pub mod coordinator;
pub mod downloaders;
pub mod resolver;

pub use coordinator::fetch_all_assets;
pub use downloaders::{download_asset_async, download_document_async};
pub use resolver::{collect_references, fetch_document};
