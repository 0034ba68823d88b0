use crate::error::CoreError;

pub const MAX_AREA_CODE_LEN: usize = 3;

/// Known area codes, kept in descending lexicographic order.
///
/// Built once from the reference list and never mutated afterwards. Lookups
/// compare strings exactly, so `"01"` and `"1"` are different codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCodeSet {
    codes: Vec<String>,
}

impl AreaCodeSet {
    /// Builds the set from raw reference lines. Blank lines are skipped and
    /// duplicates collapse.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes = Vec::new();
        for line in lines {
            if let Some(code) = normalize_area_code(line.as_ref())? {
                codes.push(code);
            }
        }
        if codes.is_empty() {
            return Err(CoreError::InvalidBatch("area codes"));
        }

        codes.sort_unstable_by(|a, b| b.cmp(a));
        codes.dedup();
        Ok(Self { codes })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes
            .binary_search_by(|probe| code.cmp(probe.as_str()))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

/// Trims a reference line. Returns `None` for blank lines and rejects
/// anything that is not 1-3 ASCII digits.
pub fn normalize_area_code(raw: &str) -> Result<Option<String>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.len() > MAX_AREA_CODE_LEN || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidAreaCode(trimmed.to_string()));
    }
    Ok(Some(trimmed.to_string()))
}
