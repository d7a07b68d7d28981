//! Network facts folded into a PointId: the public IPv4 address and a
//! MAC-derived field.
//!
//! Both facts degrade to zero bytes on any failure; nothing here returns an
//! error to the caller.

pub mod dotted;
pub mod interfaces;
pub mod public_ip;

pub use dotted::{ZERO_QUAD, parse_dotted_quad};
pub use interfaces::{
    InterfaceKind, InterfaceSource, NO_MAC, NetInterface, StaticInterfaces, SystemInterfaces,
    mac_field, mac_text, select_mac_text,
};
pub use public_ip::{
    DEFAULT_IP_ECHO_URL, DEFAULT_IP_TIMEOUT, FixedIp, PublicIpClient, PublicIpSource, UNKNOWN_IP,
};

/// Errors from the network lookups. Only seen inside this crate's fallbacks
/// and by callers of [`PublicIpClient::fetch`].
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

/// The two network-derived PointId fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkFacts {
    pub public_ip: [u8; 4],
    pub mac: [u8; 4],
}

/// Collects both facts. The IP lookup is the only step that waits on I/O.
pub async fn collect(ip: &dyn PublicIpSource, interfaces: &dyn InterfaceSource) -> NetworkFacts {
    let ip_text = ip.public_ip().await;
    let mac_text = select_mac_text(&interfaces.interfaces());

    NetworkFacts {
        public_ip: parse_dotted_quad(&ip_text),
        mac: mac_field(&mac_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collect_parses_ip_and_zeroes_mac() {
        let ifaces = StaticInterfaces(vec![NetInterface {
            name: "eth0".into(),
            is_up: true,
            kind: InterfaceKind::Other,
            mac: Some([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]),
        }]);
        let facts = collect(&FixedIp::new("203.0.113.9"), &ifaces).await;
        assert_eq!(facts.public_ip, [203, 0, 113, 9]);
        assert_eq!(facts.mac, [0; 4]);
    }

    #[tokio::test]
    async fn collect_with_everything_failing_is_zero() {
        let facts = collect(&FixedIp::unknown(), &StaticInterfaces::default()).await;
        assert_eq!(facts, NetworkFacts::default());
    }

    #[tokio::test]
    async fn malformed_ip_body_is_zero() {
        let facts = collect(&FixedIp::new("<html>blocked</html>"), &StaticInterfaces::default()).await;
        assert_eq!(facts.public_ip, ZERO_QUAD);
    }
}
