use crate::error::AllFailed;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One mirror option for a catalog entry. Lower priority is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub url: String,
    pub priority: i64,
}

impl Candidate {
    pub fn new(url: impl Into<String>, priority: i64) -> Self {
        Self {
            url: url.into(),
            priority,
        }
    }
}

/// Which derived form of a candidate an attempt used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    Https,
    Http,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Https => write!(f, "https"),
            Scheme::Http => write!(f, "http"),
        }
    }
}

/// Diagnostic record of one bounded reachability check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeAttempt {
    pub url: String,
    pub scheme: Scheme,
    pub elapsed: Duration,
    pub error: Option<String>,
}

impl ProbeAttempt {
    pub fn succeeded(url: String, scheme: Scheme, elapsed: Duration) -> Self {
        Self {
            url,
            scheme,
            elapsed,
            error: None,
        }
    }

    pub fn with_error(url: String, scheme: Scheme, elapsed: Duration, error: String) -> Self {
        Self {
            url,
            scheme,
            elapsed,
            error: Some(error),
        }
    }
}

/// A candidate whose HTTPS and HTTP forms both failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateFailure {
    pub candidate: Candidate,
    pub attempts: Vec<ProbeAttempt>,
}

impl fmt::Display for CandidateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority {})", self.candidate.url, self.candidate.priority)?;
        for attempt in &self.attempts {
            write!(
                f,
                "; {} {}: {}",
                attempt.scheme,
                attempt.url,
                attempt.error.as_deref().unwrap_or("ok")
            )?;
        }
        Ok(())
    }
}

/// Result of one resolution request.
#[derive(Debug)]
pub enum ProbeOutcome {
    Resolved(String),
    Failed(AllFailed),
}

impl ProbeOutcome {
    pub fn resolved_url(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Resolved(url) => Some(url),
            ProbeOutcome::Failed(_) => None,
        }
    }
}

impl From<Result<String, AllFailed>> for ProbeOutcome {
    fn from(result: Result<String, AllFailed>) -> Self {
        match result {
            Ok(url) => ProbeOutcome::Resolved(url),
            Err(e) => ProbeOutcome::Failed(e),
        }
    }
}
