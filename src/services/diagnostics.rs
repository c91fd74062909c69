use std::time::Duration;

use reqwest::Method;
use serde_json::Value;
use tracing::{info, warn};

use crate::services::api::LogsApi;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

pub const TROUBLESHOOTING_HINTS: [&str; 5] = [
    "Make sure the API server is running",
    "Verify network connectivity between this machine and the API server",
    "Check that CORS is configured on the API server",
    "Ensure the logs endpoint exists (/api/logs/)",
    "Check whether a firewall or proxy is blocking the connection",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeStatus {
    Reachable { code: u16 },
    ErrorStatus { code: u16, reason: String },
    NoResponse,
    RequestSetup(String),
}

/// Outcome of a one-off connectivity check against the logs endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeReport {
    pub url: String,
    pub status: ProbeStatus,
    pub body: Option<String>,
}

impl ProbeReport {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, ProbeStatus::Reachable { .. })
    }

    pub fn summary(&self) -> String {
        match &self.status {
            ProbeStatus::Reachable { .. } => {
                "API connection successful! Check details below.".to_string()
            }
            ProbeStatus::ErrorStatus { code, reason } => {
                format!("API responded with error: {code} {reason}")
            }
            ProbeStatus::NoResponse => {
                "No response received from API. Possible network issue or server is down."
                    .to_string()
            }
            ProbeStatus::RequestSetup(message) => format!("Error setting up request: {message}"),
        }
    }
}

pub async fn probe_logs_endpoint(api: &LogsApi) -> ProbeReport {
    let (url, request) = match api.request(Method::GET, "logs/") {
        Ok(pair) => pair,
        Err(err) => {
            return ProbeReport {
                url: api.config().base_url.to_string(),
                status: ProbeStatus::RequestSetup(err.to_string()),
                body: None,
            };
        }
    };

    let response = match request.timeout(PROBE_TIMEOUT).send().await {
        Ok(response) => response,
        Err(err) => {
            warn!(%url, error = %err, "connection probe failed");
            let status = if err.is_builder() {
                ProbeStatus::RequestSetup(err.to_string())
            } else {
                ProbeStatus::NoResponse
            };
            return ProbeReport {
                url: url.to_string(),
                status,
                body: None,
            };
        }
    };

    let status = response.status();
    let body = match response.bytes().await {
        Ok(bytes) => Some(render_body(&bytes)),
        Err(err) => {
            warn!(%url, error = %err, "could not read probe response body");
            None
        }
    };
    info!(%url, %status, "connection probe answered");

    let status = if status.is_success() {
        ProbeStatus::Reachable {
            code: status.as_u16(),
        }
    } else {
        ProbeStatus::ErrorStatus {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    };

    ProbeReport {
        url: url.to_string(),
        status,
        body,
    }
}

/// Pretty JSON when the body parses, otherwise the text as sent.
fn render_body(bytes: &[u8]) -> String {
    serde_json::from_slice::<Value>(bytes)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .unwrap_or_else(|| String::from_utf8_lossy(bytes).into_owned())
}
