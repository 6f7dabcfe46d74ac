//! Download functionality for remote documents and assets
//!
//! One streaming download core with per-call timeout and size ceiling,
//! wrapped per payload kind. The size limit is enforced twice: from
//! Content-Length before the body is read, and chunk-by-chunk while
//! streaming. Rate of failure never matters here — callers decide whether
//! a failed download is fatal (the primary document) or isolated (assets).

use anyhow::{Context, Result};
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;

use crate::config::FuseConfig;
use crate::inline::AssetKind;
use crate::utils::CHROME_USER_AGENT;

/// Core text download implementation
async fn download_text_core(
    url: &str,
    client: &Client,
    accept: &str,
    timeout: Duration,
    max_size: usize,
) -> Result<String> {
    let response = client
        .get(url)
        .timeout(timeout)
        .header("User-Agent", CHROME_USER_AGENT)
        .header("Accept", accept)
        .send()
        .await
        .context("Failed to send request")?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "download failed with status: {}",
            response.status()
        ));
    }

    // Enforce the limit from Content-Length BEFORE downloading
    let expected_size = response.content_length().unwrap_or(0);
    if expected_size > max_size as u64 {
        return Err(anyhow::anyhow!(
            "response too large: {expected_size} bytes exceeds limit of {max_size} bytes"
        ));
    }

    let mut buffer = if expected_size > 0 {
        Vec::with_capacity(expected_size as usize)
    } else {
        Vec::new()
    };

    // Stream with size checking (second line of defense)
    let mut stream = response.bytes_stream();
    let mut total_size = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.context("Failed to read response chunk")?;

        let new_total = total_size + chunk.len();
        if new_total > max_size {
            return Err(anyhow::anyhow!(
                "download exceeded size limit: {new_total} bytes (max: {max_size})"
            ));
        }

        buffer.extend_from_slice(&chunk);
        total_size = new_total;
    }

    String::from_utf8(buffer).context("response body is not valid UTF-8")
}

/// Download the primary HTML document
pub async fn download_document_async(
    url: &str,
    client: &Client,
    config: &FuseConfig,
) -> Result<String> {
    download_text_core(
        url,
        client,
        "text/html,application/xhtml+xml,*/*;q=0.8",
        config.document_timeout,
        config.max_asset_size,
    )
    .await
}

/// Download one asset's content, with an Accept header matching its kind
pub async fn download_asset_async(
    url: &str,
    kind: AssetKind,
    client: &Client,
    config: &FuseConfig,
) -> Result<String> {
    let accept = match kind {
        AssetKind::Stylesheet => "text/css,*/*;q=0.1",
        AssetKind::Script => "application/javascript,text/javascript,*/*;q=0.1",
    };

    download_text_core(url, client, accept, config.asset_timeout, config.max_asset_size).await
}
