use crate::domain::area_code::{AreaCodeSet, MAX_AREA_CODE_LEN};
use crate::domain::candidate::Candidate;

/// Length of emergency and short service numbers, counted under their own key.
pub const SHORT_CODE_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedNumber {
    pub area_code: Option<String>,
    pub subscriber_number: String,
    pub valid: bool,
}

impl ClassifiedNumber {
    fn matched(area_code: &str, subscriber_number: &str) -> Self {
        Self {
            area_code: Some(area_code.to_string()),
            subscriber_number: subscriber_number.to_string(),
            valid: true,
        }
    }

    fn unmatched(candidate: &Candidate) -> Self {
        Self {
            area_code: None,
            subscriber_number: candidate.as_str().to_string(),
            valid: false,
        }
    }
}

/// Splits a candidate into area code and subscriber number, trying the
/// longest prefix first.
pub fn classify(candidate: &Candidate, area_codes: &AreaCodeSet) -> ClassifiedNumber {
    if candidate.len() == SHORT_CODE_LEN {
        return ClassifiedNumber::matched(candidate.as_str(), "");
    }

    for len in (1..=MAX_AREA_CODE_LEN).rev() {
        let prefix = candidate.prefix(len);
        if area_codes.contains(prefix) {
            return ClassifiedNumber::matched(prefix, &candidate.as_str()[prefix.len()..]);
        }
    }

    ClassifiedNumber::unmatched(candidate)
}
