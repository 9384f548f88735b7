//! Mirror Admin: offline operator tool for the authenticated state mirror.

use clap::Parser;
use mirror_admin::{run, Args};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // MIRROR_LOG takes precedence over RUST_LOG
    let env_filter = EnvFilter::try_from_env("MIRROR_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    println!("{}", run(args.command)?);
    Ok(())
}
