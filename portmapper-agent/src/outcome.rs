//! Typed result of a reporting operation

/// Diagnostic returned when no capture device matches the selected adapter.
/// The wording is load-bearing: the provisioning workflow's tooling greps
/// for it.
pub const DEVICE_MATCH_DIAGNOSTIC: &str =
    "Unable to match selected network adapter to ICaptureDevice";

/// Diagnostic returned when no LLDP frame was observed or the observed
/// frame could not be decoded
pub const CAPTURE_DIAGNOSTIC: &str =
    "Unable to capture packet: Check the connection and try again";

/// Outcome of one reporting operation.
///
/// Expected network-absence conditions are variants here, not errors: a
/// missing device, a silent link, and a malformed neighbor advertisement
/// are all normal operational results of plugging into the wrong jack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Report accepted by the endpoint; carries the raw response body
    Submitted(String),
    /// No capture device's MAC matched the selected interface
    DeviceNotFound,
    /// Capture timed out without an LLDP frame
    NoFrame,
    /// A frame arrived but the topology fields could not be extracted
    Malformed(String),
    /// The report could not be delivered to the endpoint
    TransportFailed(String),
}

impl ReportOutcome {
    /// Whether the report reached the endpoint
    pub fn is_success(&self) -> bool {
        matches!(self, ReportOutcome::Submitted(_))
    }

    /// Render as the result string of the public reporting contract
    pub fn render(self) -> String {
        match self {
            ReportOutcome::Submitted(body) => body,
            ReportOutcome::DeviceNotFound => DEVICE_MATCH_DIAGNOSTIC.to_string(),
            ReportOutcome::NoFrame | ReportOutcome::Malformed(_) => CAPTURE_DIAGNOSTIC.to_string(),
            ReportOutcome::TransportFailed(detail) => {
                format!("Unable to submit report: {detail}")
            }
        }
    }
}
