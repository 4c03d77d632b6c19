use crate::error::{ProbeError, Result};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Budget for a single reachability attempt. The HTTPS and HTTP attempts of a
/// candidate each get the full window.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(5000);

const USER_AGENT: &str = "Mirrorlink/0.1 (https://github.com/trapdoorsec/mirrorlink)";

/// Lightweight reachability check against one fully-qualified URL.
///
/// Implementations only report whether the exchange completed. Timeouts are
/// applied by the caller, so a prober may wait indefinitely.
pub trait Prober: Send + Sync {
    fn reach(&self, url: &str) -> impl Future<Output = std::result::Result<(), ProbeError>> + Send;
}

/// HEAD-request prober backed by reqwest.
///
/// Any response counts as reachable, whatever its status code. A mirror that
/// answers 503 is therefore picked over the next candidate. This matches the
/// opaque check the catalog page has always done and is a known limitation.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Prober for HttpProber {
    async fn reach(&self, url: &str) -> std::result::Result<(), ProbeError> {
        let response = self.client.head(url).send().await?;
        debug!("HEAD {} completed with status {}", url, response.status());
        Ok(())
    }
}

/// True when `raw` starts with a URL scheme such as `https://`.
pub fn has_scheme(raw: &str) -> bool {
    match raw.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// First form probed for a candidate: scheme-qualified input is kept as-is,
/// a bare host gets `https://`.
pub fn https_form(raw: &str) -> String {
    if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

/// Fallback form: a literal `https://` is swapped for `http://`, a bare host
/// gets `http://`. No URL parsing happens here.
pub fn http_form(raw: &str) -> String {
    if has_scheme(raw) {
        raw.replacen("https://", "http://", 1)
    } else {
        format!("http://{}", raw)
    }
}
