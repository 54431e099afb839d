//! Portmapper Core Library
//!
//! This crate provides the fundamental types, error handling, and network
//! interface inventory used by the portmapper jack-registration tool.

pub mod error;
pub mod frame;
pub mod interface;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use frame::Frame;
pub use interface::{
    get_interface, ipv4_or_sentinel, list_interfaces, InterfaceIdentity, InterfaceInfo,
    NO_IPV4_SENTINEL,
};
pub use types::{MacAddr, OperStatus};
