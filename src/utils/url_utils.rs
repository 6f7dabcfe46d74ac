//! Utility functions for URL handling and reference resolution

use anyhow::{Context, Result};
use url::Url;

/// Resolve a potentially relative URL against a base URL
///
/// This function ensures proper percent-encoding of query parameters,
/// fixing issues with URLs from HTML that have unencoded special characters
/// (e.g., Google Fonts URLs with `:`, `,`, `@`, `;` in query strings).
pub fn resolve_url(base_url: &str, url: &str) -> Result<String> {
    let base = Url::parse(base_url).context("Invalid base URL")?;
    let mut resolved = base.join(url).context("Failed to resolve URL")?;

    // Re-encode query string to fix unencoded special characters from HTML.
    // Some servers (like Google Fonts) strictly require proper percent-encoding.
    if resolved.query().is_some() {
        // Collect query pairs into owned strings to avoid borrow conflicts
        let query_pairs: Vec<(String, String)> = resolved
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        resolved.query_pairs_mut().clear();
        for (key, value) in query_pairs {
            resolved.query_pairs_mut().append_pair(&key, &value);
        }
    }

    Ok(resolved.to_string())
}
