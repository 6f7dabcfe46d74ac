//! Remote resolution: primary document fetch and reference discovery
//!
//! Reference scanning is a read-only pass over the parsed document;
//! the parse here is independent of the mutable tree the inlining engine
//! builds later, so extraction stays synchronous and Send-friendly while
//! downloads run concurrently.

use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{Html, Selector};

use super::downloaders::download_document_async;
use crate::config::FuseConfig;
use crate::error::{FuseError, FuseResult};
use crate::inline::{AssetKind, AssetReference, InlineError};
use crate::utils::resolve_url;

lazy_static! {
    // These selectors are hardcoded and syntactically valid CSS selectors.
    // If they fail to parse, it indicates a compile-time bug in the selector strings.
    static ref STYLESHEET_SELECTOR: Selector = Selector::parse("link[rel~=\"stylesheet\"]")
        .expect("BUG: hardcoded selector 'link[rel~=\"stylesheet\"]' is invalid");

    static ref SCRIPT_SELECTOR: Selector = Selector::parse("script[src]")
        .expect("BUG: hardcoded selector 'script[src]' is invalid");
}

/// Fetch the primary document at `url`
///
/// Any failure here — transport error, timeout, non-2xx status — is fatal
/// for the request: there is no document to inline into.
pub async fn fetch_document(url: &str, client: &Client, config: &FuseConfig) -> FuseResult<String> {
    download_document_async(url, client, config)
        .await
        .map_err(|e| FuseError::PrimaryFetchFailed {
            url: url.to_string(),
            reason: format!("{e:#}"),
        })
}

/// Scan a document for stylesheet and script references
///
/// Returns references in document order, stylesheets before scripts, each
/// locator resolved against `base_url` (the original request URL — any
/// `<base>` tag in the document is ignored). A locator that cannot be
/// resolved is recorded as a failure for that reference only.
pub fn collect_references(html: &str, base_url: &str) -> (Vec<AssetReference>, Vec<InlineError>) {
    let document = Html::parse_document(html);
    let mut references = Vec::new();
    let mut failures = Vec::new();

    for element in document.select(&STYLESHEET_SELECTOR) {
        if let Some(href) = element.value().attr("href") {
            match resolve_url(base_url, href) {
                Ok(resolved) => references.push(AssetReference {
                    kind: AssetKind::Stylesheet,
                    href: href.to_string(),
                    resolved,
                }),
                Err(e) => {
                    let error = e.to_string();
                    log::warn!("Failed to resolve stylesheet URL {href}: {error}");
                    failures.push(InlineError {
                        url: href.to_string(),
                        kind: AssetKind::Stylesheet,
                        error,
                    });
                }
            }
        }
    }

    for element in document.select(&SCRIPT_SELECTOR) {
        if let Some(src) = element.value().attr("src") {
            match resolve_url(base_url, src) {
                Ok(resolved) => references.push(AssetReference {
                    kind: AssetKind::Script,
                    href: src.to_string(),
                    resolved,
                }),
                Err(e) => {
                    let error = e.to_string();
                    log::warn!("Failed to resolve script URL {src}: {error}");
                    failures.push(InlineError {
                        url: src.to_string(),
                        kind: AssetKind::Script,
                        error,
                    });
                }
            }
        }
    }

    (references, failures)
}
