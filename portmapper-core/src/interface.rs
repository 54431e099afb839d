//! Network interface inventory and the interface identity
//!
//! The identity binds a session to one physical or virtual interface: the
//! MAC address is fixed at construction, the IPv4 address is cached and may
//! be refreshed on demand (DHCP can change it under us).

use ipnetwork::IpNetwork;
use parking_lot::RwLock;
use pnet_datalink::{self, NetworkInterface};
use std::fmt;
use std::net::IpAddr;
use tracing::debug;

use crate::{Error, MacAddr, OperStatus, Result};

/// Sentinel returned when an interface has no IPv4 unicast address bound.
/// Absence of an address is a valid, reportable state, not a fault.
pub const NO_IPV4_SENTINEL: &str = "0.0.0.0";

/// Information about a network interface
#[derive(Debug, Clone)]
pub struct InterfaceInfo {
    /// Interface name (e.g., "eth0", "en0")
    pub name: String,
    /// Human-readable description (empty on most Unix platforms)
    pub description: String,
    /// MAC address if available
    pub mac: Option<MacAddr>,
    /// Addresses assigned to this interface
    pub ips: Vec<IpAddr>,
    /// Whether the interface is up
    pub is_up: bool,
    /// Whether the interface is a loopback
    pub is_loopback: bool,
}

impl From<&NetworkInterface> for InterfaceInfo {
    fn from(iface: &NetworkInterface) -> Self {
        let mac = iface
            .mac
            .map(|mac| MacAddr::new([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5]));

        let ips: Vec<IpAddr> = iface.ips.iter().map(IpNetwork::ip).collect();

        InterfaceInfo {
            name: iface.name.clone(),
            description: iface.description.clone(),
            mac,
            ips,
            is_up: iface.is_up(),
            is_loopback: iface.is_loopback(),
        }
    }
}

impl InterfaceInfo {
    /// Check if the interface is suitable for packet capture
    pub fn is_capture_capable(&self) -> bool {
        self.is_up && !self.is_loopback && self.mac.is_some()
    }

    /// First IPv4 unicast address in dotted-decimal form, or the
    /// `0.0.0.0` sentinel when none is bound
    pub fn ipv4_or_sentinel(&self) -> String {
        ipv4_or_sentinel(&self.ips)
    }

    /// Operational status as reported by the inventory
    pub fn oper_status(&self) -> OperStatus {
        if self.is_up {
            OperStatus::Up
        } else {
            OperStatus::Down
        }
    }
}

impl fmt::Display for InterfaceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mac = self
            .mac
            .map(|m| m.to_string())
            .unwrap_or_else(|| "no MAC".to_string());
        write!(f, "{} ({}) {}", self.name, mac, self.oper_status())
    }
}

/// First IPv4 address of an address list, dotted-decimal, or the sentinel
pub fn ipv4_or_sentinel(ips: &[IpAddr]) -> String {
    ips.iter()
        .find_map(|ip| match ip {
            IpAddr::V4(v4) => Some(v4.to_string()),
            IpAddr::V6(_) => None,
        })
        .unwrap_or_else(|| NO_IPV4_SENTINEL.to_string())
}

/// List all available network interfaces
pub fn list_interfaces() -> Result<Vec<InterfaceInfo>> {
    let interfaces = pnet_datalink::interfaces();

    if interfaces.is_empty() {
        return Err(Error::Interface(
            "No network interfaces found. Are you running with sufficient privileges?".to_string(),
        ));
    }

    Ok(interfaces.iter().map(InterfaceInfo::from).collect())
}

/// Get information about a specific interface by name
pub fn get_interface(name: &str) -> Result<InterfaceInfo> {
    let interfaces = pnet_datalink::interfaces();

    interfaces
        .iter()
        .find(|iface| iface.name == name)
        .map(InterfaceInfo::from)
        .ok_or_else(|| Error::InterfaceNotFound(name.to_string()))
}

/// Identity of the interface a registration session operates on.
///
/// The MAC address is read once at construction and never changes; the IPv4
/// address is cached and can be recomputed with [`InterfaceIdentity::refresh_ip`].
#[derive(Debug)]
pub struct InterfaceIdentity {
    name: String,
    mac: MacAddr,
    ipv4: RwLock<String>,
}

impl InterfaceIdentity {
    /// Bind an identity to the named interface
    pub fn new(name: &str) -> Result<Self> {
        let info = get_interface(name)?;
        let mac = info.mac.ok_or_else(|| {
            Error::Interface(format!("interface '{name}' has no hardware address"))
        })?;
        let ipv4 = info.ipv4_or_sentinel();

        debug!(interface = %name, %mac, %ipv4, "bound interface identity");

        Ok(Self {
            name: name.to_string(),
            mac,
            ipv4: RwLock::new(ipv4),
        })
    }

    /// Build an identity from already-known parts. Used by callers that
    /// resolved the interface themselves, and by tests.
    pub fn from_parts(name: &str, mac: MacAddr, ipv4: &str) -> Self {
        Self {
            name: name.to_string(),
            mac,
            ipv4: RwLock::new(ipv4.to_string()),
        }
    }

    /// Interface name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hardware address, fixed at construction
    pub fn mac(&self) -> MacAddr {
        self.mac
    }

    /// Canonical uppercase colon-hex MAC string
    pub fn canonical_mac(&self) -> String {
        self.mac.canonical()
    }

    /// Cached IPv4 address string
    pub fn ipv4(&self) -> String {
        self.ipv4.read().clone()
    }

    /// Recompute the cached IPv4 address from the current interface state
    pub fn refresh_ip(&self) -> String {
        let ipv4 = match get_interface(&self.name) {
            Ok(info) => info.ipv4_or_sentinel(),
            Err(_) => NO_IPV4_SENTINEL.to_string(),
        };
        *self.ipv4.write() = ipv4.clone();
        ipv4
    }

    /// Operational status of the interface at call time
    pub fn operational_status(&self) -> OperStatus {
        match get_interface(&self.name) {
            Ok(info) => info.oper_status(),
            Err(_) => OperStatus::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_ipv4_sentinel_empty_list() {
        assert_eq!(ipv4_or_sentinel(&[]), "0.0.0.0");
    }

    #[test]
    fn test_ipv4_sentinel_v6_only() {
        let ips = vec![IpAddr::V6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1))];
        assert_eq!(ipv4_or_sentinel(&ips), "0.0.0.0");
    }

    #[test]
    fn test_ipv4_first_address_wins() {
        let ips = vec![
            IpAddr::V6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1)),
            IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3)),
            IpAddr::V4(Ipv4Addr::new(192, 168, 0, 9)),
        ];
        assert_eq!(ipv4_or_sentinel(&ips), "10.1.2.3");
    }

    #[test]
    fn test_list_interfaces() {
        // Should at least have loopback on any test host
        let interfaces = list_interfaces().unwrap();
        assert!(!interfaces.is_empty());
        for iface in &interfaces {
            assert!(!iface.name.is_empty());
        }
    }

    #[test]
    fn test_get_nonexistent_interface() {
        let result = get_interface("nonexistent_interface_xyz");
        match result {
            Err(Error::InterfaceNotFound(name)) => {
                assert_eq!(name, "nonexistent_interface_xyz");
            }
            other => panic!("expected InterfaceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_identity_from_parts() {
        let mac: MacAddr = "AA:BB:CC:DD:EE:FF".parse().unwrap();
        let identity = InterfaceIdentity::from_parts("test0", mac, "10.0.0.1");
        assert_eq!(identity.name(), "test0");
        assert_eq!(identity.mac(), mac);
        assert_eq!(identity.canonical_mac(), "AA:BB:CC:DD:EE:FF");
        assert_eq!(identity.ipv4(), "10.0.0.1");
    }

    #[test]
    fn test_identity_status_unknown_for_missing_interface() {
        let identity =
            InterfaceIdentity::from_parts("nonexistent_interface_xyz", MacAddr::zero(), "0.0.0.0");
        assert_eq!(identity.operational_status(), OperStatus::Unknown);
        // Refreshing against a missing interface falls back to the sentinel
        assert_eq!(identity.refresh_ip(), "0.0.0.0");
    }
}
