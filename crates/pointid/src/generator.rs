//! Identifier generator.
//!
//! Owns the in-process counter and the collaborators that supply the
//! machine, network and interface facts. Generation never fails: every
//! collaborator is total and degrades to a sentinel.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use pointgen_fingerprint::{FingerprintSource, fingerprint_from, native_source};
use pointgen_netfacts::{
    FixedIp, InterfaceSource, PublicIpClient, PublicIpSource, SystemInterfaces,
    mac_field, select_mac_text,
};
use tracing::{debug, trace};

use crate::buffer::Fields;
use crate::config::Config;
use crate::id::PointId;

pub struct Generator {
    counter: AtomicU32,
    fingerprint: Box<dyn FingerprintSource>,
    public_ip: Box<dyn PublicIpSource>,
    interfaces: Box<dyn InterfaceSource>,
}

impl Generator {
    /// Creates a generator backed by the host's native sources.
    pub fn new(config: &Config) -> Self {
        let public_ip: Box<dyn PublicIpSource> =
            match PublicIpClient::new(config.ip_echo_url.clone(), config.ip_timeout()) {
                Ok(client) => Box::new(client),
                Err(e) => {
                    debug!(error = %e, "HTTP client unavailable, public IP disabled");
                    Box::new(FixedIp::unknown())
                }
            };

        Self {
            counter: AtomicU32::new(0),
            fingerprint: native_source(),
            public_ip,
            interfaces: Box::new(SystemInterfaces),
        }
    }

    pub fn with_fingerprint_source(mut self, source: impl FingerprintSource + 'static) -> Self {
        self.fingerprint = Box::new(source);
        self
    }

    pub fn with_public_ip_source(mut self, source: impl PublicIpSource + 'static) -> Self {
        self.public_ip = Box::new(source);
        self
    }

    pub fn with_interface_source(mut self, source: impl InterfaceSource + 'static) -> Self {
        self.interfaces = Box::new(source);
        self
    }

    /// Number of identifiers handed out so far (wrapping).
    pub fn issued(&self) -> u32 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Generates the next identifier. Waits at most the configured IP
    /// lookup timeout.
    pub async fn next_id(&self) -> PointId {
        let mut fields = self.local_fields();
        let facts =
            pointgen_netfacts::collect(self.public_ip.as_ref(), self.interfaces.as_ref()).await;
        fields.public_ip = facts.public_ip;
        fields.mac = facts.mac;
        self.finish(fields)
    }

    /// Generates the next identifier without the public IP lookup; the IP
    /// field is left zeroed.
    pub fn next_id_offline(&self) -> PointId {
        let mut fields = self.local_fields();
        fields.mac = mac_field(&select_mac_text(&self.interfaces.interfaces()));
        self.finish(fields)
    }

    fn local_fields(&self) -> Fields {
        let fingerprint = fingerprint_from(self.fingerprint.as_ref());
        let timestamp_ms = Utc::now().timestamp_millis();
        let process_id = std::process::id();
        let counter = self.counter.fetch_add(1, Ordering::Relaxed);

        Fields {
            fingerprint,
            timestamp_ms,
            process_id,
            counter,
            ..Fields::default()
        }
    }

    fn finish(&self, fields: Fields) -> PointId {
        let id = PointId::from_fields(&fields);
        trace!(counter = fields.counter, id = %id, "point id generated");
        id
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
