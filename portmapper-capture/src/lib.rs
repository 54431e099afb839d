//! Packet capture for portmapper
//!
//! This crate wraps pcap for the one operation the registration tool needs:
//! find the capture device whose MAC matches the selected interface, open it
//! in promiscuous mode, and block for a single filtered frame within a
//! bounded timeout.
//!
//! ## Example
//!
//! ```no_run
//! use portmapper_capture::{filters, open_matching_device};
//!
//! # fn main() -> portmapper_core::Result<()> {
//! let target = "AA:BB:CC:DD:EE:FF".parse()?;
//! let mut session = open_matching_device(&target)?;
//! session.set_filter(&filters::lldp_dst_filter())?;
//! match session.capture_one()? {
//!     Some(frame) => println!("got {} bytes", frame.len()),
//!     None => println!("no frame before timeout"),
//! }
//! session.close();
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod filters;

// Re-export main types
pub use capture::{
    open_matching_device, open_matching_device_with_config, CaptureConfig, CaptureSession,
    DEVICE_READ_TIMEOUT_MS,
};
