use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let addr = std::env::var("PAGEFUSE_ADDR")
        .unwrap_or_else(|_| pagefuse::utils::DEFAULT_BIND_ADDR.to_string());

    pagefuse::server::run(&addr, pagefuse::FuseConfig::default()).await
}
