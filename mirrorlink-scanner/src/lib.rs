pub mod error;
pub mod probe;
pub mod resolver;
pub mod result;

pub use error::{AllFailed, ProbeError, ScanError};
pub use probe::{HttpProber, PROBE_TIMEOUT, Prober};
pub use resolver::{AttemptCallback, Resolver};
pub use result::{Candidate, CandidateFailure, ProbeAttempt, ProbeOutcome, Scheme};
