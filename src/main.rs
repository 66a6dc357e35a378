use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use minbar::config::Config;
use minbar::logging::init_tracing;
use minbar::shutdown::ShutdownCoordinator;
use minbar::site::assets::probe_optional_asset;
use minbar::site::server::SiteServer;
use minbar::viewport::{DeviceWatcher, TerminalViewport};

#[derive(Parser)]
#[command(
    name = "minbar",
    about = "Serve the site's fixed endpoints and watch the viewport breakpoint"
)]
struct Cli {
    /// Path to the config file (defaults to the per-user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind address from config.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }
    config.validate().context("validating config")?;

    if let Some(script) = &config.site.analytics_script {
        probe_optional_asset("analytics script", script);
    }

    let provider = TerminalViewport::spawn().context("starting viewport watcher")?;
    let mut watcher = DeviceWatcher::new(provider)
        .with_on_change(|class| info!(%class, "layout breakpoint crossed"));
    watcher.activate();
    info!(class = %watcher.current(), "initial device classification");

    let shutdown = ShutdownCoordinator::new();
    let ctrl_c_handle = shutdown.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_handle.signal();
        }
    });

    let config = Arc::new(config);
    let mut server = SiteServer::new(Arc::clone(&config));
    let addr = server.try_bind().await.context("binding site server")?;
    info!(%addr, base_url = %config.site.base_url, "serving site endpoints");
    server.run(shutdown.handle()).await?;

    watcher.deactivate();
    Ok(())
}
