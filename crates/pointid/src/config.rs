//! Generator configuration.
//!
//! Every field has a default; `Config::default()` is what the process-wide
//! generator uses.

use std::time::Duration;

use pointgen_netfacts::{DEFAULT_IP_ECHO_URL, DEFAULT_IP_TIMEOUT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint answering with the caller's public IPv4 address as text.
    #[serde(default = "default_ip_echo_url")]
    pub ip_echo_url: String,

    /// Upper bound on the public IP request, in seconds.
    #[serde(default = "default_ip_timeout_secs")]
    pub ip_timeout_secs: u64,
}

fn default_ip_echo_url() -> String {
    DEFAULT_IP_ECHO_URL.into()
}

fn default_ip_timeout_secs() -> u64 {
    DEFAULT_IP_TIMEOUT.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_echo_url: default_ip_echo_url(),
            ip_timeout_secs: default_ip_timeout_secs(),
        }
    }
}

impl Config {
    pub fn ip_timeout(&self) -> Duration {
        Duration::from_secs(self.ip_timeout_secs)
    }
}
