//! Portmapper agent
//!
//! The facade of the registration tool: owns the interface identity and
//! runs the one-shot discover-and-report operation (match capture device by
//! MAC, wait for one LLDP frame, decode the switch topology, POST the
//! provisioning report).

pub mod mapper;
pub mod outcome;

// Re-export main types
pub use mapper::{MapperConfig, PortMapper};
pub use outcome::{ReportOutcome, CAPTURE_DIAGNOSTIC, DEVICE_MATCH_DIAGNOSTIC};
