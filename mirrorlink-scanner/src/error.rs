use crate::result::CandidateFailure;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP client setup failed: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// A single bounded attempt failed. Network failures and timeouts are handled
/// the same way by the resolver.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Unreachable: {0}")]
    Unreachable(String),
}

/// Every candidate exhausted both its HTTPS and HTTP attempts.
#[derive(Error, Debug)]
#[error("All URLs failed ({} candidate(s) tried)", .failures.len())]
pub struct AllFailed {
    pub failures: Vec<CandidateFailure>,
}

impl AllFailed {
    pub fn attempt_count(&self) -> usize {
        self.failures.iter().map(|f| f.attempts.len()).sum()
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
