use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntryDto {
    pub area_code: String,
    pub count: u64,
}
