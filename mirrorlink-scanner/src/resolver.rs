use crate::error::{AllFailed, ProbeError, Result};
use crate::probe::{http_form, https_form, HttpProber, Prober, PROBE_TIMEOUT};
use crate::result::{Candidate, CandidateFailure, ProbeAttempt, Scheme};
use std::sync::Arc;
use tokio::time::{timeout, Instant};
use tracing::{debug, info};

/// Called with each URL right before it is probed.
pub type AttemptCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Fallback chain for one candidate. `Resolved` is the only way out other
/// than `Failed`.
enum ProbeState {
    TryHttps,
    TryHttp,
    Resolved(String),
    Failed(ProbeError),
}

/// Picks the first reachable candidate in priority order.
///
/// Attempts are strictly sequential: at most one request is in flight per
/// [`Resolver::resolve`] call. The resolver keeps no state between calls, so a
/// single instance can serve concurrent resolutions.
pub struct Resolver<P = HttpProber> {
    prober: P,
    attempt_callback: Option<AttemptCallback>,
}

impl Resolver<HttpProber> {
    pub fn new() -> Result<Self> {
        Ok(Self::with_prober(HttpProber::new()?))
    }
}

impl<P: Prober> Resolver<P> {
    pub fn with_prober(prober: P) -> Self {
        Self {
            prober,
            attempt_callback: None,
        }
    }

    pub fn with_attempt_callback(mut self, callback: AttemptCallback) -> Self {
        self.attempt_callback = Some(callback);
        self
    }

    /// Resolve `candidates` to the first reachable URL.
    ///
    /// Candidates are ordered by ascending priority, ties keep their input
    /// order. Each one is tried over HTTPS, then HTTP. The first success wins
    /// and nothing after it is probed. An empty slice fails without touching
    /// the network.
    pub async fn resolve(&self, candidates: &[Candidate]) -> std::result::Result<String, AllFailed> {
        let mut ordered: Vec<&Candidate> = candidates.iter().collect();
        ordered.sort_by_key(|c| c.priority);

        debug!("Resolving {} candidate(s)", ordered.len());

        let mut failures = Vec::new();
        for candidate in ordered {
            let (outcome, attempts) = self.run_candidate(&candidate.url).await;
            match outcome {
                Ok(url) => {
                    info!("Resolved {} (priority {}) to {}", candidate.url, candidate.priority, url);
                    return Ok(url);
                }
                Err(e) => {
                    debug!("URL {} failed: {}", candidate.url, e);
                    failures.push(CandidateFailure {
                        candidate: candidate.clone(),
                        attempts,
                    });
                }
            }
        }

        Err(AllFailed { failures })
    }

    /// Probe one raw candidate URL: its HTTPS form first, then its HTTP form.
    /// Returns the form that answered, or the error of the last attempt.
    pub async fn probe_candidate(&self, raw_url: &str) -> std::result::Result<String, ProbeError> {
        self.run_candidate(raw_url).await.0
    }

    async fn run_candidate(
        &self,
        raw_url: &str,
    ) -> (std::result::Result<String, ProbeError>, Vec<ProbeAttempt>) {
        let mut attempts = Vec::with_capacity(2);
        let mut state = ProbeState::TryHttps;

        loop {
            state = match state {
                ProbeState::TryHttps => {
                    let url = https_form(raw_url);
                    match self.attempt(&url, Scheme::Https, &mut attempts).await {
                        Ok(()) => ProbeState::Resolved(url),
                        Err(_) => ProbeState::TryHttp,
                    }
                }
                ProbeState::TryHttp => {
                    let url = http_form(raw_url);
                    match self.attempt(&url, Scheme::Http, &mut attempts).await {
                        Ok(()) => ProbeState::Resolved(url),
                        Err(e) => ProbeState::Failed(e),
                    }
                }
                ProbeState::Resolved(url) => return (Ok(url), attempts),
                ProbeState::Failed(e) => return (Err(e), attempts),
            };
        }
    }

    /// One bounded attempt. The timer is created here and dropped with the
    /// attempt, so an expired HTTPS attempt never shortens the HTTP one.
    async fn attempt(
        &self,
        url: &str,
        scheme: Scheme,
        attempts: &mut Vec<ProbeAttempt>,
    ) -> std::result::Result<(), ProbeError> {
        if let Some(ref callback) = self.attempt_callback {
            callback(url.to_string());
        }

        debug!("Probing {}", url);
        let start = Instant::now();
        let outcome = match timeout(PROBE_TIMEOUT, self.prober.reach(url)).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout(PROBE_TIMEOUT)),
        };
        let elapsed = start.elapsed();

        match outcome {
            Ok(()) => {
                attempts.push(ProbeAttempt::succeeded(url.to_string(), scheme, elapsed));
                Ok(())
            }
            Err(e) => {
                debug!("{} attempt for {} failed after {:?}: {}", scheme, url, elapsed, e);
                attempts.push(ProbeAttempt::with_error(
                    url.to_string(),
                    scheme,
                    elapsed,
                    e.to_string(),
                ));
                Err(e)
            }
        }
    }
}
