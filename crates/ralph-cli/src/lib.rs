pub mod cmd;
pub mod output;
pub mod prompt;
pub mod root;

use clap::Parser;

/// Parse the command line, exiting 1 on invalid arguments (0 for --help / --version).
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    }
}

/// Install the fmt subscriber; `RUST_LOG` adds directives on top of `default_level`.
pub fn init_tracing(default_level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the error chain and exit 1 when a command failed.
pub fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
