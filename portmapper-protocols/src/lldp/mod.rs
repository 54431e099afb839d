//! Link Layer Discovery Protocol (LLDP) - IEEE 802.1AB
//!
//! This module covers the slice of LLDP the registration tool needs:
//! parsing a received frame's TLV sequence and extracting the upstream
//! switch name and port identifier from it.
//!
//! ## Frame Structure
//!
//! LLDP frames have the following structure:
//! - Destination MAC: 01:80:C2:00:00:0E (nearest bridge multicast)
//! - Ethertype: 0x88CC
//! - TLVs: Type-Length-Value format
//!
//! Mandatory TLVs:
//! - Chassis ID (Type 1)
//! - Port ID (Type 2)
//! - TTL (Type 3)
//! - End of LLDPDU (Type 0)
//!
//! The switch name comes from the System Name TLV (Type 5) and the port
//! string from the Port ID TLV (Type 2). Some deployments instead rely on
//! the fixed TLV ordering their switch vendor emits; see
//! [`TlvLookup::Positional`].

pub mod decode;
pub mod packet;

pub use decode::{decode_topology, SwitchTopology, TlvLookup};
pub use packet::{LldpFrame, LldpTlv, LldpTlvType, PortIdSubtype, LLDP_ETHERTYPE, LLDP_MULTICAST_MAC};
