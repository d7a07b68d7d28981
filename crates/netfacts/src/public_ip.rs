//! Public IPv4 lookup through an IP-echo HTTP endpoint.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::debug;

use crate::NetError;

/// Default IP-echo endpoint; answers with the caller's address as plain text.
pub const DEFAULT_IP_ECHO_URL: &str = "https://api.ipify.org";

/// Default upper bound on the whole request.
pub const DEFAULT_IP_TIMEOUT: Duration = Duration::from_secs(5);

/// Address text used whenever the lookup fails.
pub const UNKNOWN_IP: &str = "0.0.0.0";

/// Anything that can report the public address as dotted-quad text.
///
/// Implementations must be total: return [`UNKNOWN_IP`] instead of failing.
pub trait PublicIpSource: Send + Sync {
    fn public_ip(&self) -> Pin<Box<dyn Future<Output = String> + Send + '_>>;
}

/// Source that always reports the same address text.
#[derive(Debug, Clone)]
pub struct FixedIp(pub String);

impl FixedIp {
    pub fn new(ip: impl Into<String>) -> Self {
        Self(ip.into())
    }

    /// A source that behaves like a lookup that always fails.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_IP)
    }
}

impl PublicIpSource for FixedIp {
    fn public_ip(&self) -> Pin<Box<dyn Future<Output = String> + Send + '_>> {
        let ip = self.0.clone();
        Box::pin(async move { ip })
    }
}

/// HTTP client for the IP-echo endpoint.
pub struct PublicIpClient {
    http: reqwest::Client,
    url: String,
}

impl PublicIpClient {
    /// Creates a client for `url` whose requests give up after `timeout`.
    ///
    /// Connections are not pooled: every lookup opens its own, so the client
    /// can be driven from different runtimes.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NetError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs one GET and returns the trimmed body. No retries.
    pub async fn fetch(&self) -> Result<String, NetError> {
        let resp = self.http.get(&self.url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(NetError::Status(status.as_u16()));
        }

        Ok(resp.text().await?.trim().to_string())
    }
}

impl PublicIpSource for PublicIpClient {
    fn public_ip(&self) -> Pin<Box<dyn Future<Output = String> + Send + '_>> {
        Box::pin(async move {
            match self.fetch().await {
                Ok(ip) => ip,
                Err(e) => {
                    debug!(url = %self.url, error = %e, "public IP lookup failed");
                    UNKNOWN_IP.into()
                }
            }
        })
    }
}
