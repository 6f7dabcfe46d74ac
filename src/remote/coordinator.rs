//! Fetch coordinator: concurrent fan-out of asset downloads
//!
//! All asset fetches for one document are issued concurrently and the
//! coordinator returns only once every fetch has settled. Each future
//! carries its own [`AssetReference`], so results are associated back to
//! their reference by identity, never by completion order. One failed
//! asset never aborts the batch, and no asset gets a second attempt.

use futures::future::join_all;
use reqwest::Client;

use super::downloaders::download_asset_async;
use crate::config::FuseConfig;
use crate::inline::{AssetReference, FetchedAsset, InlineError};

/// Fetch every referenced asset concurrently, each under its own timeout
///
/// The output is one-to-one with the input: every reference ends up in
/// exactly one of the returned collections.
pub async fn fetch_all_assets(
    references: Vec<AssetReference>,
    client: &Client,
    config: &FuseConfig,
) -> (Vec<FetchedAsset>, Vec<InlineError>) {
    let futures = references.into_iter().map(|reference| {
        let client = client.clone();
        let config = config.clone();

        async move {
            log::debug!("Fetching {} from {}", reference.kind, reference.resolved);

            match download_asset_async(&reference.resolved, reference.kind, &client, &config).await
            {
                Ok(body) => {
                    log::debug!(
                        "Downloaded {} content from {} ({} chars)",
                        reference.kind,
                        reference.resolved,
                        body.len()
                    );
                    Ok(FetchedAsset { reference, body })
                }
                Err(e) => {
                    let error = format!("{e:#}");
                    log::warn!(
                        "Failed to fetch {} from {}: {error}",
                        reference.kind,
                        reference.resolved
                    );
                    Err(InlineError {
                        url: reference.resolved,
                        kind: reference.kind,
                        error,
                    })
                }
            }
        }
    });

    // Execute all downloads concurrently and wait for every one to settle
    let results = join_all(futures).await;

    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(asset) => successes.push(asset),
            Err(error) => failures.push(error),
        }
    }

    (successes, failures)
}
