//! pagefuse — combine a multi-file web page into one self-contained HTML file
//!
//! Two independent pipelines share one output contract:
//!
//! - [`combine_from_zip`] takes an uploaded ZIP archive, extracts it into a
//!   request-scoped temporary directory, and inlines every `.css`/`.js`
//!   file in the tree into the primary HTML document it finds there.
//! - [`combine_from_url`] fetches a live document, discovers its
//!   `<link rel=stylesheet>` and `<script src>` references, downloads all
//!   of them concurrently, and replaces each reference node with an inline
//!   copy of its content.
//!
//! Data flows one way: resolver → asset descriptors → fetch/read →
//! inlining engine → serialized output. The document tree is only ever
//! mutated after every fetch has settled, in a single sequential pass.

pub mod bundle;
pub mod config;
pub mod error;
pub mod inline;
pub mod remote;
pub mod server;
pub mod utils;

pub use config::FuseConfig;
pub use error::{FuseError, FuseResult};
pub use inline::{AssetKind, AssetReference, FetchedAsset, InlineError, InlineReport};

use url::Url;

/// Combine an uploaded ZIP bundle into one self-contained document
///
/// Fully sequential and local: any unreadable file is fatal for the
/// request, so a successful report never carries per-asset failures.
/// The extracted tree lives in a temporary directory that is removed on
/// every exit path.
pub fn combine_from_zip(archive_bytes: &[u8]) -> FuseResult<InlineReport> {
    log::info!("Processing ZIP bundle ({} bytes)", archive_bytes.len());

    let workdir = tempfile::tempdir()
        .map_err(|e| FuseError::Other(format!("failed to create temporary directory: {e}")))?;
    bundle::extract_archive(archive_bytes, workdir.path())?;

    let tree = bundle::Bundle::scan(workdir.path())?;
    let document_path = tree.primary_document().ok_or(FuseError::NoDocumentFound)?;
    let html = bundle::read_bundle_file(document_path)?;

    let stylesheets = tree
        .stylesheets()
        .iter()
        .map(|path| bundle::read_bundle_file(path))
        .collect::<FuseResult<Vec<_>>>()?;
    let scripts = tree
        .scripts()
        .iter()
        .map(|path| bundle::read_bundle_file(path))
        .collect::<FuseResult<Vec<_>>>()?;

    let successes = stylesheets.len() + scripts.len();
    let combined = inline::append_bundle_assets(html, &stylesheets, &scripts)?;

    log::info!("Bundle combine complete: {successes} assets inlined");
    Ok(InlineReport {
        html: combined,
        successes,
        failures: Vec::new(),
    })
}

/// Combine a live page at `url` into one self-contained document
///
/// The primary document fetch is fatal on failure; individual asset
/// fetches are isolated, recorded in the report, and leave their
/// reference nodes untouched in the output.
pub async fn combine_from_url(url: &str, config: &FuseConfig) -> FuseResult<InlineReport> {
    let base = Url::parse(url).map_err(|_| FuseError::InvalidUrl(url.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(FuseError::InvalidUrl(url.to_string()));
    }

    log::info!("Processing URL {base}");
    let client = reqwest::Client::new();

    let html = remote::fetch_document(base.as_str(), &client, config).await?;

    let (references, mut failures) = remote::collect_references(&html, base.as_str());
    log::debug!("Found {} asset references", references.len());

    let (fetched, fetch_failures) = remote::fetch_all_assets(references, &client, config).await;
    failures.extend(fetch_failures);

    let combined = inline::replace_reference_nodes(html, &fetched)?;

    log::info!(
        "URL combine complete for {base}: {} inlined, {} failed",
        fetched.len(),
        failures.len()
    );
    Ok(InlineReport {
        html: combined,
        successes: fetched.len(),
        failures,
    })
}
