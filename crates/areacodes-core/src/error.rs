use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid batch: no {0} received")]
    InvalidBatch(&'static str),
    #[error("empty result: {0}")]
    EmptyResult(&'static str),
    #[error("invalid candidate: {0:?}")]
    InvalidCandidate(String),
    #[error("invalid area code: {0:?}")]
    InvalidAreaCode(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
