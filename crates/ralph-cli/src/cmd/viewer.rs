use anyhow::Context;
use ralph_core::config::Config;
use ralph_viewer::AppState;
use std::path::Path;

/// Command-line overrides for the `viewer` section of the config file.
#[derive(Debug, Default)]
pub struct ViewerArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub poll_interval_ms: Option<u64>,
    pub open: bool,
}

pub fn run(root: &Path, args: ViewerArgs) -> anyhow::Result<()> {
    let mut config = Config::load(root).context("failed to load config")?;
    if let Some(host) = args.host {
        config.viewer.host = host;
    }
    if let Some(port) = args.port {
        config.viewer.port = port;
    }
    if let Some(ms) = args.poll_interval_ms {
        config.viewer.poll_interval_ms = ms;
    }
    config.validate()?;

    let state = AppState::from_config(root, &config);
    tracing::info!(
        prd = %state.paths.prd.display(),
        progress = %state.paths.progress.display(),
        poll_ms = config.viewer.poll_interval_ms,
        "starting log viewer"
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(ralph_viewer::serve(
        state,
        &config.viewer.host,
        config.viewer.port,
        args.open,
    ))
}
