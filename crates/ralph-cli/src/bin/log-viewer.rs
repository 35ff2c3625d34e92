use clap::Parser;
use ralph_cli::cmd::{self, viewer::ViewerArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "log-viewer",
    about = "Serve the live transcript viewer for .claude/ralph/logs",
    version
)]
struct Cli {
    /// Project root (default: auto-detect from .claude/ralph/ or .git/)
    #[arg(long, env = "RALPH_ROOT")]
    root: Option<PathBuf>,

    /// Address to bind (default from config, else 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (default from config, else 5000)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// How often streams re-check transcript sizes, in milliseconds
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Open the viewer in a browser once listening
    #[arg(long)]
    open: bool,
}

fn main() {
    let cli: Cli = ralph_cli::parse_args();
    ralph_cli::init_tracing(tracing::Level::INFO);

    let root = ralph_cli::root::resolve_root(cli.root.as_deref());
    let result = cmd::viewer::run(
        &root,
        ViewerArgs {
            host: cli.host,
            port: cli.port,
            poll_interval_ms: cli.poll_interval_ms,
            open: cli.open,
        },
    );

    ralph_cli::exit_on_error(result);
}
