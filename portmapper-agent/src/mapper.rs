//! The port mapper facade
//!
//! One `PortMapper` is bound to one network interface. Its reporting
//! operation walks a fixed pipeline: match a capture device to the
//! interface's MAC, block for a single LLDP frame within the device
//! timeout, decode the switch topology, submit the provisioning report.
//! There is no retry loop; each stage either advances or short-circuits to
//! a [`ReportOutcome`]. The capture device is released before the operation
//! returns, on every path.

use std::time::Duration;

use tokio::task;
use tracing::{debug, info, warn};

use portmapper_capture::{filters, open_matching_device_with_config, CaptureConfig};
use portmapper_core::{Error, Frame, InterfaceIdentity, MacAddr, OperStatus, Result};
use portmapper_protocols::lldp::{decode_topology, TlvLookup};
use portmapper_report::{ProvisioningReport, ReportClient, DEFAULT_HTTP_TIMEOUT};

use crate::outcome::ReportOutcome;

/// Configuration for a [`PortMapper`]
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Base URL of the provisioning server
    pub server_url: String,
    /// How the topology TLVs are located within a captured frame
    pub lookup: TlvLookup,
    /// Capture device configuration
    pub capture: CaptureConfig,
    /// Bound on the report submission round trip
    pub http_timeout: Duration,
}

impl MapperConfig {
    /// Configuration with defaults for everything but the server URL
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: server_url.to_string(),
            lookup: TlvLookup::default(),
            capture: CaptureConfig::default(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

/// Facade over the discovery-and-registration pipeline
pub struct PortMapper {
    identity: InterfaceIdentity,
    config: MapperConfig,
    client: ReportClient,
}

impl PortMapper {
    /// Bind a mapper to the named interface
    pub fn new(interface: &str, config: MapperConfig) -> Result<Self> {
        let identity = InterfaceIdentity::new(interface)?;
        Self::with_identity(identity, config)
    }

    /// Build a mapper from an already-resolved identity
    pub fn with_identity(identity: InterfaceIdentity, config: MapperConfig) -> Result<Self> {
        let client = ReportClient::with_timeout(&config.server_url, config.http_timeout)?;
        Ok(Self {
            identity,
            config,
            client,
        })
    }

    /// Name of the bound interface
    pub fn interface_name(&self) -> &str {
        self.identity.name()
    }

    /// MAC address of the bound interface
    pub fn mac(&self) -> MacAddr {
        self.identity.mac()
    }

    /// Cached IPv4 address string of the bound interface
    pub fn ipv4(&self) -> String {
        self.identity.ipv4()
    }

    /// Recompute the cached IPv4 address
    pub fn refresh_ip(&self) -> String {
        self.identity.refresh_ip()
    }

    /// Operational status of the bound interface at call time
    pub fn operational_status(&self) -> OperStatus {
        self.identity.operational_status()
    }

    /// Run the one-shot reporting operation.
    ///
    /// Blocking capture work runs on a worker thread; the caller observes a
    /// single result and no partial progress.
    pub async fn report(&self, room: &str, jack: &str, user: &str, pass: &str) -> ReportOutcome {
        let target = self.identity.mac();
        let capture_config = self.config.capture.clone();

        debug!(interface = %self.identity.name(), mac = %target, "matching capture device");
        let captured = match task::spawn_blocking(move || {
            capture_lldp_frame(&target, &capture_config)
        })
        .await
        {
            Ok(result) => result,
            Err(e) => Err(Error::capture(format!("capture task failed: {e}"))),
        };

        let frame = match captured {
            Err(Error::NoMatchingDevice(mac)) => {
                warn!(%mac, "no capture device matched the selected adapter");
                return ReportOutcome::DeviceNotFound;
            }
            Err(e) => {
                warn!(error = %e, "capture fault, no frame obtained");
                return ReportOutcome::NoFrame;
            }
            Ok(None) => {
                info!(interface = %self.identity.name(), "no LLDP frame before timeout");
                return ReportOutcome::NoFrame;
            }
            Ok(Some(frame)) => frame,
        };

        let topology = match decode_topology(frame.data(), self.config.lookup) {
            Ok(topology) => topology,
            Err(e) => {
                warn!(error = %e, "captured frame did not decode");
                return ReportOutcome::Malformed(e.to_string());
            }
        };
        info!(
            switch = %topology.switch_name,
            port = %topology.port,
            gigabit = topology.gigabit,
            "switch topology decoded"
        );

        let report = ProvisioningReport::new(room, jack, &topology, user, pass);
        match self.client.submit(&report).await {
            Ok(body) => ReportOutcome::Submitted(body),
            Err(Error::Transport(detail)) => {
                warn!(error = %detail, "report submission failed");
                ReportOutcome::TransportFailed(detail)
            }
            Err(e) => {
                warn!(error = %e, "report submission failed");
                ReportOutcome::TransportFailed(e.to_string())
            }
        }
    }

    /// Public reporting contract: run [`PortMapper::report`] and render the
    /// outcome as the result string the provisioning workflow expects
    pub async fn post_net_center(&self, room: &str, jack: &str, user: &str, pass: &str) -> String {
        self.report(room, jack, user, pass).await.render()
    }
}

/// Blocking half of the pipeline: device scan, filter install, single read.
/// The session is released before this returns, whatever happens.
fn capture_lldp_frame(target: &MacAddr, config: &CaptureConfig) -> Result<Option<Frame>> {
    let mut session = open_matching_device_with_config(target, config)?;
    let result = session
        .set_filter(&filters::lldp_dst_filter())
        .and_then(|()| session.capture_one());
    session.close();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_mapper(mac: &str) -> PortMapper {
        let identity =
            InterfaceIdentity::from_parts("test0", mac.parse().unwrap(), "0.0.0.0");
        // TEST-NET-1; the transport is never reached in these tests
        let config = MapperConfig::new("http://192.0.2.1:9");
        PortMapper::with_identity(identity, config).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = MapperConfig::new("https://netcenter.campus.example");
        assert_eq!(config.server_url, "https://netcenter.campus.example");
        assert_eq!(config.lookup, TlvLookup::ByType);
        assert_eq!(config.capture.timeout_ms, 4000);
        assert_eq!(config.http_timeout, DEFAULT_HTTP_TIMEOUT);
    }

    #[test]
    fn test_accessors() {
        let mapper = test_mapper("02:00:00:FE:ED:02");
        assert_eq!(mapper.interface_name(), "test0");
        assert_eq!(mapper.mac().canonical(), "02:00:00:FE:ED:02");
        assert_eq!(mapper.ipv4(), "0.0.0.0");
        assert_eq!(mapper.operational_status(), OperStatus::Unknown);
    }

    #[tokio::test]
    async fn test_report_with_unmatched_mac_is_device_not_found() {
        if pcap::Device::list().is_err() {
            println!("could not enumerate capture devices, skipping");
            return;
        }

        // Locally-administered MAC no real adapter carries
        let mapper = test_mapper("02:00:00:FE:ED:03");
        let outcome = mapper.report("101", "J1", "u", "p").await;
        assert_eq!(outcome, ReportOutcome::DeviceNotFound);
    }

    #[tokio::test]
    async fn test_post_net_center_renders_device_diagnostic() {
        if pcap::Device::list().is_err() {
            println!("could not enumerate capture devices, skipping");
            return;
        }

        let mapper = test_mapper("02:00:00:FE:ED:04");
        let result = mapper.post_net_center("101", "J1", "u", "p").await;
        assert_eq!(
            result,
            "Unable to match selected network adapter to ICaptureDevice"
        );
    }
}
