use crate::error::CoreError;
use serde::Serialize;
use std::fmt;

/// A phone number reduced to ASCII digits, ready for classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Candidate(String);

impl Candidate {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        Self::try_from(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Leading `len` digits, or the whole candidate when it is shorter.
    pub fn prefix(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }
}

impl TryFrom<String> for Candidate {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidCandidate(value));
        }
        Ok(Self(value))
    }
}

impl From<Candidate> for String {
    fn from(value: Candidate) -> Self {
        value.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
