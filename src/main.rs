use anyhow::Result;
use clap::Parser;
use spec_splitter::{pipeline, Args};
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // stdout carries the matrix, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("spec_splitter=info".parse()?))
        .init();

    let config = Args::parse().into_config();
    tracing::debug!(?config, "resolved configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline::run(&config, &mut out)?;

    Ok(())
}
