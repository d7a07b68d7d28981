//! Local network interface enumeration and MAC selection.

use tracing::debug;

use crate::dotted::parse_dotted_quad;

/// MAC text used when no interface qualifies.
pub const NO_MAC: &str = "00-00-00-00-00-00";

/// Name prefixes of virtual point-to-point / tunnel devices.
const TUNNEL_PREFIXES: &[&str] = &[
    "tun", "utun", "sit", "gre", "ipip", "ip6tnl", "wg", "teredo", "isatap",
];

/// Coarse interface classification used for MAC selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    Loopback,
    Tunnel,
    Other,
}

/// A local network interface as seen by the MAC collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetInterface {
    pub name: String,
    pub is_up: bool,
    pub kind: InterfaceKind,
    pub mac: Option<[u8; 6]>,
}

/// Anything that can list the local network interfaces.
pub trait InterfaceSource: Send + Sync {
    fn interfaces(&self) -> Vec<NetInterface>;
}

/// Fixed interface list, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticInterfaces(pub Vec<NetInterface>);

impl InterfaceSource for StaticInterfaces {
    fn interfaces(&self) -> Vec<NetInterface> {
        self.0.clone()
    }
}

/// Lists the host's interfaces via `if-addrs`, with hardware addresses from
/// `mac_address`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Vec<NetInterface> {
        let addrs = match if_addrs::get_if_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                debug!(error = %e, "interface enumeration failed");
                return Vec::new();
            }
        };

        // if-addrs yields one entry per address; keep the first entry per name.
        let mut out: Vec<NetInterface> = Vec::new();
        for iface in addrs {
            if out.iter().any(|known| known.name == iface.name) {
                continue;
            }
            let kind = classify(&iface.name, iface.is_loopback());
            out.push(NetInterface {
                is_up: is_oper_up(&iface.name),
                mac: hardware_address(&iface.name),
                name: iface.name,
                kind,
            });
        }
        out
    }
}

/// Classifies an interface from its loopback flag and name.
pub fn classify(name: &str, is_loopback: bool) -> InterfaceKind {
    if is_loopback {
        InterfaceKind::Loopback
    } else if TUNNEL_PREFIXES.iter().any(|p| name.starts_with(p)) {
        InterfaceKind::Tunnel
    } else {
        InterfaceKind::Other
    }
}

fn hardware_address(name: &str) -> Option<[u8; 6]> {
    match mac_address::mac_address_by_name(name) {
        Ok(mac) => mac.map(|m| m.bytes()),
        Err(e) => {
            debug!(interface = name, error = %e, "hardware address unavailable");
            None
        }
    }
}

#[cfg(target_os = "linux")]
fn is_oper_up(name: &str) -> bool {
    // Loopback and some virtual drivers report "unknown" while passing traffic.
    match std::fs::read_to_string(format!("/sys/class/net/{name}/operstate")) {
        Ok(state) => matches!(state.trim(), "up" | "unknown"),
        Err(_) => true,
    }
}

// An interface that holds an address is treated as up.
#[cfg(not(target_os = "linux"))]
fn is_oper_up(_name: &str) -> bool {
    true
}

/// Renders a hardware address as 12 uppercase hex digits, no separators.
pub fn mac_text(mac: &[u8; 6]) -> String {
    mac.iter().map(|b| format!("{b:02X}")).collect()
}

/// Picks the MAC text of the first interface that is up and is neither
/// loopback nor a tunnel.
///
/// A qualifying interface without a hardware address yields an empty string;
/// no qualifying interface yields [`NO_MAC`].
pub fn select_mac_text(interfaces: &[NetInterface]) -> String {
    interfaces
        .iter()
        .find(|i| i.is_up && i.kind == InterfaceKind::Other)
        .map(|i| i.mac.as_ref().map(mac_text).unwrap_or_default())
        .unwrap_or_else(|| NO_MAC.to_string())
}

/// Derives the 4-byte MAC field from MAC text.
///
/// The text goes through the dotted-quad parser, so separator-free or
/// dash-separated MAC text always produces zeros.
pub fn mac_field(mac_text: &str) -> [u8; 4] {
    parse_dotted_quad(mac_text)
}
