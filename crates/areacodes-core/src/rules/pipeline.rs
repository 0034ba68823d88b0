//! Normalization of raw input lines into digit-only candidates.
//!
//! Every stage runs over the whole batch before the next one starts. A stage
//! handed an empty batch fails with [`CoreError::InvalidBatch`]; a stage that
//! filters every item out fails with [`CoreError::EmptyResult`].

use crate::domain::Candidate;
use crate::error::{CoreError, Result};
use tracing::debug;

/// Candidate lengths accepted by the final stage.
pub const VALID_LENGTHS: [usize; 7] = [3, 7, 8, 9, 10, 11, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    InitialChars,
    BlankSpaces,
    PlusSign,
    LeadingZeros,
    OnlyDigits,
    Length,
}

/// Stage order matters: plus removal must run before leading-zero removal,
/// and the digit check must follow every transform.
pub const PIPELINE: [Stage; 6] = [
    Stage::InitialChars,
    Stage::BlankSpaces,
    Stage::PlusSign,
    Stage::LeadingZeros,
    Stage::OnlyDigits,
    Stage::Length,
];

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::InitialChars => "initial-chars",
            Stage::BlankSpaces => "blank-spaces",
            Stage::PlusSign => "plus-sign",
            Stage::LeadingZeros => "leading-zeros",
            Stage::OnlyDigits => "only-digits",
            Stage::Length => "length",
        }
    }

    fn empty_result(self) -> CoreError {
        CoreError::EmptyResult(match self {
            Stage::InitialChars => "no number on the list starts with valid chars",
            Stage::BlankSpaces => "no numbers left after removing blank spaces",
            Stage::PlusSign => "no numbers left after removing the plus sign",
            Stage::LeadingZeros => "no numbers left after removing leading zeros",
            Stage::OnlyDigits => "there is no number made only of digits",
            Stage::Length => "there is no number with a valid length",
        })
    }

    pub fn apply(self, batch: Vec<String>) -> Result<Vec<String>> {
        if batch.is_empty() {
            return Err(CoreError::InvalidBatch("numbers"));
        }

        let before = batch.len();
        let out: Vec<String> = match self {
            Stage::InitialChars => batch
                .into_iter()
                .filter(|item| starts_with_valid_chars(item))
                .collect(),
            Stage::BlankSpaces => batch
                .into_iter()
                .map(|item| strip_blank_spaces(&item))
                .collect(),
            Stage::PlusSign => batch
                .into_iter()
                .map(|item| strip_plus_sign(&item).to_string())
                .collect(),
            Stage::LeadingZeros => batch
                .into_iter()
                .map(|item| strip_leading_zeros(&item).to_string())
                .collect(),
            Stage::OnlyDigits => batch
                .into_iter()
                .filter(|item| is_only_digits(item))
                .collect(),
            Stage::Length => batch
                .into_iter()
                .filter(|item| has_valid_length(item))
                .collect(),
        };
        debug!(stage = self.name(), before, after = out.len(), "stage applied");

        if out.is_empty() {
            return Err(self.empty_result());
        }
        Ok(out)
    }
}

/// Runs every stage in order and returns the surviving candidates.
pub fn normalize(lines: Vec<String>) -> Result<Vec<Candidate>> {
    let mut batch = lines;
    for stage in PIPELINE {
        batch = stage.apply(batch)?;
    }
    batch.into_iter().map(Candidate::try_from).collect()
}

pub fn check_initial_chars(batch: Vec<String>) -> Result<Vec<String>> {
    Stage::InitialChars.apply(batch)
}

pub fn remove_blank_spaces(batch: Vec<String>) -> Result<Vec<String>> {
    Stage::BlankSpaces.apply(batch)
}

pub fn remove_plus_sign(batch: Vec<String>) -> Result<Vec<String>> {
    Stage::PlusSign.apply(batch)
}

pub fn remove_leading_zeros(batch: Vec<String>) -> Result<Vec<String>> {
    Stage::LeadingZeros.apply(batch)
}

pub fn check_only_digits(batch: Vec<String>) -> Result<Vec<String>> {
    Stage::OnlyDigits.apply(batch)
}

pub fn check_length(batch: Vec<String>) -> Result<Vec<String>> {
    Stage::Length.apply(batch)
}

/// A leading digit, or `+` followed by a digit where the two characters after
/// the `+` are not `00`.
pub fn starts_with_valid_chars(item: &str) -> bool {
    match item.as_bytes() {
        [b'+', rest @ ..] => {
            rest.first().is_some_and(u8::is_ascii_digit) && !rest.starts_with(b"00")
        }
        [first, ..] => first.is_ascii_digit(),
        [] => false,
    }
}

pub fn strip_blank_spaces(item: &str) -> String {
    item.replace('\t', "").split(' ').collect()
}

pub fn strip_plus_sign(item: &str) -> &str {
    item.strip_prefix('+').unwrap_or(item)
}

pub fn strip_leading_zeros(item: &str) -> &str {
    item.strip_prefix("00").unwrap_or(item)
}

pub fn is_only_digits(item: &str) -> bool {
    !item.is_empty() && item.bytes().all(|b| b.is_ascii_digit())
}

pub fn has_valid_length(item: &str) -> bool {
    VALID_LENGTHS.contains(&item.len())
}
