use clap::Parser;
use ralph_cli::cmd;
use ralph_core::prd::Verdict;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "prd-status",
    about = "Mark a PRD task as pass, fail or pending",
    version
)]
struct Cli {
    /// Project root (default: auto-detect from .claude/ralph/ or .git/)
    #[arg(long, env = "RALPH_ROOT")]
    root: Option<PathBuf>,

    /// PRD file (default: .claude/ralph/plans/prd.json under the root)
    #[arg(long, env = "RALPH_PRD")]
    prd: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, short = 'j')]
    json: bool,

    /// pass, fail or pending
    verdict: Verdict,

    /// Task id
    id: String,
}

fn main() {
    let cli: Cli = ralph_cli::parse_args();
    ralph_cli::init_tracing(tracing::Level::WARN);

    let root = ralph_cli::root::resolve_root(cli.root.as_deref());
    let result = cmd::prd_path(&root, cli.prd)
        .and_then(|path| cmd::status::run(&path, cli.verdict, &cli.id, cli.json));

    ralph_cli::exit_on_error(result);
}
