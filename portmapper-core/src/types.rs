//! Common types used throughout portmapper

use std::fmt;
use std::str::FromStr;

/// MAC Address (6 bytes)
///
/// The canonical textual form used everywhere in this tool is uppercase
/// colon-separated hex (`AA:BB:CC:DD:EE:FF`). Parsing accepts either case,
/// so byte equality between two parsed addresses is a case-insensitive
/// comparison of their textual forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    /// Create a new MAC address
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Zero MAC address (00:00:00:00:00:00)
    pub const fn zero() -> Self {
        Self([0x00, 0x00, 0x00, 0x00, 0x00, 0x00])
    }

    /// Get bytes as slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert to array
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Canonical uppercase colon-hex form
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddr {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 6 {
            return Err(crate::Error::Interface(format!(
                "invalid MAC address format: '{s}'"
            )));
        }

        let mut bytes = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            if part.len() != 2 {
                return Err(crate::Error::Interface(format!(
                    "invalid MAC address octet: '{part}'"
                )));
            }
            bytes[i] = u8::from_str_radix(part, 16).map_err(|_| {
                crate::Error::Interface(format!("invalid MAC address hex: '{part}'"))
            })?;
        }

        Ok(MacAddr(bytes))
    }
}

/// Operational status of a network interface, passed through verbatim from
/// the host's interface inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperStatus {
    /// Interface is administratively and operationally up
    Up,
    /// Interface is present but down
    Down,
    /// Interface state could not be determined
    Unknown,
}

impl fmt::Display for OperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperStatus::Up => "up",
            OperStatus::Down => "down",
            OperStatus::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}
