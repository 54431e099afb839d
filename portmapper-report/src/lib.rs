//! Provisioning reporter for portmapper
//!
//! Builds the registration form payload and submits it to the provisioning
//! endpoint. The form encoding is fixed by the existing server-side script;
//! see [`form::ProvisioningReport::to_form_body`] before changing anything
//! about it.

pub mod client;
pub mod form;

// Re-export main types
pub use client::{ReportClient, DEFAULT_HTTP_TIMEOUT, PROVISIONING_PATH};
pub use form::ProvisioningReport;
