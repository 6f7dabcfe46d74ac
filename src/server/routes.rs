//! HTTP front end: one entry point, two mutually exclusive input modes
//!
//! The transport layer is a thin shim over the two pipeline functions.
//! A request is either bundle-mode (a ZIP upload in the `file` field) or
//! URL-mode (an absolute URL in the `url` field), never both; the upload
//! takes precedence when both are present. Success returns the combined
//! document as a file download, any fatal error returns a plain-text
//! message.

use axum::Router;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use crate::config::FuseConfig;
use crate::error::{FuseError, FuseResult};
use crate::utils::{MAX_UPLOAD_SIZE, URL_DOWNLOAD_NAME, ZIP_DOWNLOAD_NAME};

/// Build the application router
pub fn router(config: FuseConfig) -> Router {
    Router::new()
        .route("/", get(index).post(process))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
        .with_state(config)
}

async fn index() -> Html<&'static str> {
    Html(super::markup::UPLOAD_FORM)
}

async fn process(State(config): State<FuseConfig>, multipart: Multipart) -> Response {
    match handle_submission(&config, multipart).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Request failed: {e}");
            format!("An error occurred: {e}").into_response()
        }
    }
}

async fn handle_submission(config: &FuseConfig, mut multipart: Multipart) -> FuseResult<Response> {
    let mut archive: Option<Vec<u8>> = None;
    let mut url: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| FuseError::Other(format!("invalid form submission: {e}")))?
    {
        // Take an owned copy: reading the field body consumes it
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let named = field.file_name().is_some_and(|name| !name.is_empty());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| FuseError::Other(format!("upload read failed: {e}")))?;
                if named && !bytes.is_empty() {
                    archive = Some(bytes.to_vec());
                }
            }
            Some("url") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| FuseError::Other(format!("form read failed: {e}")))?;
                let value = value.trim();
                if !value.is_empty() {
                    url = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    if let Some(archive) = archive {
        // The bundle pipeline is purely local file I/O; keep it off the
        // async worker threads.
        let report = tokio::task::spawn_blocking(move || crate::combine_from_zip(&archive))
            .await
            .map_err(|e| FuseError::Other(format!("bundle task failed: {e}")))??;

        Ok(download_response(ZIP_DOWNLOAD_NAME, report.html))
    } else if let Some(url) = url {
        let report = crate::combine_from_url(&url, config).await?;
        if report.has_failures() {
            log::warn!(
                "{} of {} assets could not be inlined for {url}",
                report.failures.len(),
                report.total()
            );
        }

        Ok(download_response(URL_DOWNLOAD_NAME, report.html))
    } else {
        Err(FuseError::Other(
            "submit either a ZIP file or a URL".to_string(),
        ))
    }
}

fn download_response(filename: &str, html: String) -> Response {
    (
        [
            (
                header::CONTENT_TYPE,
                "text/html; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        html,
    )
        .into_response()
}
