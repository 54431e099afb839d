//! Captured frame type

use std::time::SystemTime;

/// A single captured link-layer frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// When the frame was captured
    pub timestamp: SystemTime,
    /// Interface the frame was received on
    pub interface: String,
    /// Frame data, including the Ethernet header
    pub data: Vec<u8>,
}

impl Frame {
    /// Create a new frame
    pub fn new(interface: String, data: Vec<u8>) -> Self {
        Self {
            timestamp: SystemTime::now(),
            interface,
            data,
        }
    }

    /// Get frame data as slice
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get frame length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the frame is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
