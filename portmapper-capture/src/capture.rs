//! One-shot packet capture wrapper around pcap
//!
//! Unlike a long-running sniffer, the registration tool opens a device,
//! waits for exactly one frame, and releases the device again. Device
//! selection is by MAC address: the capture inventory is scanned and the
//! device matching the target interface's MAC is retained. At most one
//! device is ever open during the scan.

use pcap::{Active, Capture, Device};
use tracing::{debug, info, warn};

use portmapper_core::{get_interface, Error, Frame, MacAddr, Result};

/// Default snapshot length (maximum bytes per frame)
const DEFAULT_SNAPLEN: i32 = 65535;

/// Device read timeout in milliseconds. Bounds the single blocking read so
/// a link with no LLDP-speaking neighbor cannot hang the operation.
pub const DEVICE_READ_TIMEOUT_MS: i32 = 4000;

/// Configuration for a capture session
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Maximum bytes to capture per frame
    pub snaplen: i32,
    /// Read timeout in milliseconds
    pub timeout_ms: i32,
    /// Enable promiscuous mode
    pub promiscuous: bool,
    /// Deliver frames immediately instead of buffering
    pub immediate_mode: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snaplen: DEFAULT_SNAPLEN,
            timeout_ms: DEVICE_READ_TIMEOUT_MS,
            promiscuous: true,
            immediate_mode: true,
        }
    }
}

/// An open capture device, held for the duration of one reporting operation.
///
/// The device is released when [`CaptureSession::close`] is called or the
/// session is dropped, whichever comes first. Every exit path therefore
/// leaves the interface out of promiscuous mode.
pub struct CaptureSession {
    device_name: String,
    capture: Option<Capture<Active>>,
}

impl CaptureSession {
    fn open(device: Device, config: &CaptureConfig) -> Result<Self> {
        let device_name = device.name.clone();
        debug!(device = %device_name, "opening capture device");

        let capture = Capture::from_device(device)
            .map_err(|e| Error::capture(format!("failed to create capture: {e}")))?
            .promisc(config.promiscuous)
            .snaplen(config.snaplen)
            .timeout(config.timeout_ms)
            .immediate_mode(config.immediate_mode)
            .open()
            .map_err(|e| Error::capture(format!("failed to open capture: {e}")))?;

        Ok(Self {
            device_name,
            capture: Some(capture),
        })
    }

    /// Name of the underlying capture device
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Install a BPF filter on the open device
    pub fn set_filter(&mut self, bpf: &str) -> Result<()> {
        debug!(device = %self.device_name, filter = %bpf, "setting BPF filter");
        let capture = self
            .capture
            .as_mut()
            .ok_or_else(|| Error::capture("capture already closed"))?;
        capture
            .filter(bpf, true)
            .map_err(|e| Error::capture(format!("invalid BPF filter '{bpf}': {e}")))
    }

    /// Block for the next frame satisfying the installed filter.
    ///
    /// This is a single blocking read: if the device's read timeout elapses
    /// first, `Ok(None)` is returned rather than an error. Other capture
    /// faults surface as errors.
    pub fn capture_one(&mut self) -> Result<Option<Frame>> {
        let capture = self
            .capture
            .as_mut()
            .ok_or_else(|| Error::capture("capture already closed"))?;

        match capture.next_packet() {
            Ok(packet) => {
                let frame = Frame::new(self.device_name.clone(), packet.data.to_vec());
                debug!(device = %self.device_name, len = frame.len(), "captured frame");
                Ok(Some(frame))
            }
            Err(pcap::Error::TimeoutExpired) => {
                debug!(device = %self.device_name, "read timeout, no frame observed");
                Ok(None)
            }
            Err(e) => Err(Error::capture(format!("read failed: {e}"))),
        }
    }

    /// Release the capture device
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.capture.take().is_some() {
            debug!(device = %self.device_name, "capture device released");
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.release();
    }
}

/// Open the capture device whose MAC address matches `target`.
///
/// Scans the full device list; the MAC of each candidate is resolved through
/// the interface inventory before the device is opened, so no more than one
/// device is ever held open. Scanning continues through the whole list and a
/// later match replaces an earlier one (last match wins, deterministically).
/// Devices that match but fail to open are skipped with a warning.
pub fn open_matching_device(target: &MacAddr) -> Result<CaptureSession> {
    open_matching_device_with_config(target, &CaptureConfig::default())
}

/// [`open_matching_device`] with explicit capture configuration
pub fn open_matching_device_with_config(
    target: &MacAddr,
    config: &CaptureConfig,
) -> Result<CaptureSession> {
    let devices =
        Device::list().map_err(|e| Error::capture(format!("device enumeration failed: {e}")))?;

    let mut matched: Option<CaptureSession> = None;
    for device in devices {
        let mac = match get_interface(&device.name) {
            Ok(info) => info.mac,
            Err(_) => None,
        };
        let Some(mac) = mac else {
            debug!(device = %device.name, "no hardware address, skipping");
            continue;
        };

        if mac != *target {
            continue;
        }

        let name = device.name.clone();
        match CaptureSession::open(device, config) {
            Ok(session) => {
                // A previous match is dropped here, which releases it
                info!(device = %name, mac = %mac, "capture device matched");
                matched = Some(session);
            }
            Err(e) => {
                warn!(device = %name, error = %e, "matching device failed to open, skipping");
            }
        }
    }

    matched.ok_or_else(|| Error::NoMatchingDevice(target.canonical()))
}
