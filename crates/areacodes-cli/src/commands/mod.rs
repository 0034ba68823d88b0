use anyhow::{Context as _, Result};
use areacodes_config::AppConfig;
use areacodes_core::Candidate;
use areacodes_store as store;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

pub mod completions;
pub mod count;
pub mod normalize;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Reads the input file and runs it through the normalization pipeline.
pub fn read_candidates(input: &Path) -> Result<Vec<Candidate>> {
    let lines = store::read_lines(input)
        .with_context(|| format!("read input file {}", input.display()))?;
    areacodes_core::normalize(lines).with_context(|| format!("normalize numbers from {}", input.display()))
}
