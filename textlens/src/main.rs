// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use textlens::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    textlens::run(args)
}
