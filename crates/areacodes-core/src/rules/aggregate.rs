use crate::domain::{classify, AreaCodeSet, Candidate, ClassifiedNumber};
use crate::dto::ReportEntryDto;
use crate::error::{CoreError, Result};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const REPORT_SEPARATOR: char = ':';

/// Occurrences per area code, ordered by raw string comparison of the code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountReport {
    counts: BTreeMap<String, u64>,
}

impl CountReport {
    pub fn get(&self, area_code: &str) -> Option<u64> {
        self.counts.get(area_code).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(code, count)| (code.as_str(), *count))
    }

    /// `<area code>:<count>` lines in output order.
    pub fn lines(&self) -> Vec<String> {
        self.iter()
            .map(|(code, count)| format!("{code}{REPORT_SEPARATOR}{count}"))
            .collect()
    }

    pub fn entries(&self) -> Vec<ReportEntryDto> {
        self.iter()
            .map(|(code, count)| ReportEntryDto {
                area_code: code.to_string(),
                count,
            })
            .collect()
    }

    fn record(&mut self, area_code: &str) {
        *self.counts.entry(area_code.to_string()).or_default() += 1;
    }
}

pub fn count_by_area_code(records: &[ClassifiedNumber]) -> Result<CountReport> {
    if records.is_empty() {
        return Err(CoreError::InvalidBatch("classified numbers"));
    }

    let mut report = CountReport::default();
    for record in records.iter().filter(|record| record.valid) {
        if let Some(area_code) = record.area_code.as_deref() {
            report.record(area_code);
        }
    }

    let discarded = records.len() as u64 - report.total();
    debug!(
        groups = report.len(),
        counted = report.total(),
        discarded,
        "numbers counted by area code"
    );
    if report.is_empty() {
        warn!("no number matched a known area code");
    }
    Ok(report)
}

pub fn group_by_area_code(
    candidates: &[Candidate],
    area_codes: &AreaCodeSet,
) -> Result<CountReport> {
    if candidates.is_empty() {
        return Err(CoreError::InvalidBatch("numbers"));
    }

    let records: Vec<ClassifiedNumber> = candidates
        .iter()
        .map(|candidate| classify(candidate, area_codes))
        .collect();
    count_by_area_code(&records)
}
