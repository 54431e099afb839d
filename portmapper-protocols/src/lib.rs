//! Protocol decoding for portmapper
//!
//! One protocol lives here today: LLDP, the only thing the registration
//! tool listens for on the wire.

pub mod lldp;
