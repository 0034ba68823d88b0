pub mod error;
pub mod lines;
pub mod paths;

use crate::error::Result;
use areacodes_core::{AreaCodeSet, CountReport};
use std::path::Path;
use tracing::info;

pub use lines::{read_lines, write_lines};

/// Loads the reference list of known area codes.
pub fn read_area_codes(path: &Path) -> Result<AreaCodeSet> {
    let lines = read_lines(path)?;
    let set = AreaCodeSet::from_lines(&lines)?;
    info!(path = %path.display(), codes = set.len(), "area codes loaded");
    Ok(set)
}

pub fn write_report(path: &Path, report: &CountReport) -> Result<()> {
    write_lines(path, report.lines())?;
    info!(
        path = %path.display(),
        area_codes = report.len(),
        numbers = report.total(),
        "report written"
    );
    Ok(())
}
