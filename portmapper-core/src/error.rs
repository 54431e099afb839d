//! Error types for portmapper

use thiserror::Error;

/// Result type alias for portmapper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for portmapper
#[derive(Error, Debug)]
pub enum Error {
    /// Network I/O error
    #[error("Network I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Interface not found
    #[error("Interface '{0}' not found")]
    InterfaceNotFound(String),

    /// Interface error
    #[error("Interface error: {0}")]
    Interface(String),

    /// Packet capture error
    #[error("Packet capture error: {0}")]
    Capture(String),

    /// No capture device matched the target MAC address
    #[error("No capture device matches MAC address {0}")]
    NoMatchingDevice(String),

    /// Frame could not be interpreted as LLDP
    #[error("Frame is not an LLDP frame")]
    NotLldp,

    /// LLDP frame present but a required field is absent or malformed
    #[error("Malformed LLDP frame: {0}")]
    MalformedLldp(String),

    /// HTTP transport failure while submitting a report
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Create a capture error with a custom message
    pub fn capture<S: Into<String>>(msg: S) -> Self {
        Error::Capture(msg.into())
    }

    /// Create a malformed-frame error with a custom message
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedLldp(msg.into())
    }

    /// Create a transport error with a custom message
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport(msg.into())
    }
}
