//! Shared utilities and constants

pub mod constants;
pub mod url_utils;

pub use constants::{
    CHROME_USER_AGENT, DEFAULT_BIND_ADDR, HTTP_TIMEOUT, MAX_ASSET_SIZE, MAX_UPLOAD_SIZE,
    URL_DOWNLOAD_NAME, ZIP_DOWNLOAD_NAME,
};
pub use url_utils::resolve_url;
