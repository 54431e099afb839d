//! HTTP submission to the provisioning endpoint

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use portmapper_core::{Error, Result};

use crate::form::ProvisioningReport;

/// Path of the provisioning script on the server
pub const PROVISIONING_PATH: &str = "/portmapper/port_authority.php";

/// Default bound on the whole POST round trip
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the provisioning endpoint.
///
/// Submits one report per call and returns the whole response body as text.
/// Status codes are not inspected; the endpoint reports its outcome in the
/// body.
#[derive(Debug, Clone)]
pub struct ReportClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ReportClient {
    /// Create a client for the given server base URL
    /// (e.g. `https://netcenter.campus.example`)
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a client with an explicit round-trip timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), PROVISIONING_PATH);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { endpoint, http })
    }

    /// Full URL the client POSTs to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a report; returns the raw response body
    pub async fn submit(&self, report: &ProvisioningReport) -> Result<String> {
        let body = report.to_form_body();
        debug!(endpoint = %self.endpoint, bytes = body.len(), "submitting provisioning report");

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::transport(format!("POST failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read response body: {e}")))?;

        info!(endpoint = %self.endpoint, %status, "provisioning report submitted");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_construction() {
        let client = ReportClient::new("https://netcenter.campus.example").unwrap();
        assert_eq!(
            client.endpoint(),
            "https://netcenter.campus.example/portmapper/port_authority.php"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let client = ReportClient::new("https://netcenter.campus.example/").unwrap();
        assert_eq!(
            client.endpoint(),
            "https://netcenter.campus.example/portmapper/port_authority.php"
        );
    }

    #[tokio::test]
    async fn test_submit_connection_failure_is_transport_error() {
        // TEST-NET-1 address, nothing listens there
        let client = ReportClient::with_timeout("http://192.0.2.1:9", Duration::from_millis(250))
            .unwrap();
        let report = ProvisioningReport {
            room_number: "101".to_string(),
            jack: "J1".to_string(),
            switch_id: "SW1".to_string(),
            port_id: "24".to_string(),
            gigabit: true,
            user: "u".to_string(),
            pass: "p".to_string(),
        };

        match client.submit(&report).await {
            Err(Error::Transport(_)) => {}
            other => panic!("expected Transport error, got {other:?}"),
        }
    }
}
