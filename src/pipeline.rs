use crate::config::Config;
use crate::discover::discover;
use crate::matrix::Matrix;
use crate::splitter::split;
use anyhow::{Context, Result};
use std::io::Write;

/// Discover, split and write the matrix for one run
///
/// Nothing is written to `out` unless every step succeeds.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Matrix> {
    let files = discover(config).context(format!(
        "Failed to discover spec files under {}",
        config.root().display()
    ))?;

    let groups = split(&files, config.parallelism, &config.device);
    let matrix = Matrix::from(groups);

    matrix
        .write_to(out, config.pretty)
        .context("Failed to emit job matrix")?;

    Ok(matrix)
}
