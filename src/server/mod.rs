//! HTTP transport shim

pub mod markup;
pub mod routes;

pub use routes::router;

use crate::config::FuseConfig;

/// Bind and serve the application until the process is stopped
pub async fn run(addr: &str, config: FuseConfig) -> anyhow::Result<()> {
    let app = router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("pagefuse listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
