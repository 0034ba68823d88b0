use crate::commands::{print_json, read_candidates, Context};
use anyhow::{Context as _, Result};
use areacodes_core::{group_by_area_code, ReportEntryDto};
use areacodes_store as store;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Text file with one phone number per line
    pub input: PathBuf,
    /// Reference list of area codes, one per line
    #[arg(long)]
    pub area_codes: Option<PathBuf>,
    /// Report file to write instead of the configured output path
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CountReportDto {
    output: String,
    total: u64,
    entries: Vec<ReportEntryDto>,
}

pub fn count(ctx: &Context<'_>, args: CountArgs) -> Result<()> {
    let area_codes_path = args
        .area_codes
        .unwrap_or_else(|| ctx.config.area_codes_path.clone());
    let output = args.output.unwrap_or_else(|| ctx.config.output_path());
    debug!(
        input = %args.input.display(),
        area_codes = %area_codes_path.display(),
        output = %output.display(),
        "counting numbers by area code"
    );

    let candidates = read_candidates(&args.input)?;
    let area_codes = store::read_area_codes(&area_codes_path)
        .with_context(|| format!("read area codes {}", area_codes_path.display()))?;
    let report = group_by_area_code(&candidates, &area_codes)
        .with_context(|| "group numbers by area code")?;
    store::write_report(&output, &report)
        .with_context(|| format!("write report {}", output.display()))?;

    if ctx.json {
        let dto = CountReportDto {
            output: output.display().to_string(),
            total: report.total(),
            entries: report.entries(),
        };
        return print_json(&dto);
    }

    println!("Report written to {}", output.display());
    Ok(())
}
