use clap::Parser;
use ralph_cli::cmd::{self, prd::PrdSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "prd",
    about = "Manage the PRD task list — list, search, add, delete, update, stats",
    version
)]
struct Cli {
    /// Project root (default: auto-detect from .claude/ralph/ or .git/)
    #[arg(long, global = true, env = "RALPH_ROOT")]
    root: Option<PathBuf>,

    /// PRD file (default: .claude/ralph/plans/prd.json under the root)
    #[arg(long, global = true, env = "RALPH_PRD")]
    prd: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: PrdSubcommand,
}

fn main() {
    let cli: Cli = ralph_cli::parse_args();
    ralph_cli::init_tracing(tracing::Level::WARN);

    let root = ralph_cli::root::resolve_root(cli.root.as_deref());
    let result = cmd::prd_path(&root, cli.prd)
        .and_then(|path| cmd::prd::run(&path, cli.command, cli.json));

    ralph_cli::exit_on_error(result);
}
