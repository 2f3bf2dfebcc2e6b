//! Rollbuf CLI - run items through bounded and sorted containers

use anyhow::Context as _;
use clap::Parser;
use rollbuf::cli::Args;
use rollbuf::config::{load_env_file, Settings};
use rollbuf::{execute_command, format_output, ExecutionContext};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "rollbuf=debug" } else { "rollbuf=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let env = load_env_file(args.env_file.as_deref()).context("loading configuration")?;
    let settings = Settings::resolve(env.as_ref(), &args.overrides()).context("resolving settings")?;

    let ctx = ExecutionContext {
        settings: &settings,
        env: env.as_ref(),
    };
    let result = execute_command(&args.to_command(), ctx)?;
    println!("{}", format_output(&result, &settings.output_format));

    Ok(())
}
