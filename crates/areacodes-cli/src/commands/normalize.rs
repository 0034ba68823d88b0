use crate::commands::{print_json, read_candidates, Context};
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text file with one phone number per line
    pub input: PathBuf,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let candidates = read_candidates(&args.input)?;

    if ctx.json {
        return print_json(&candidates);
    }

    let mut stdout = io::stdout().lock();
    for candidate in &candidates {
        writeln!(stdout, "{candidate}")?;
    }
    Ok(())
}
