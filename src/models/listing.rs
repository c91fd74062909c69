use serde::Deserialize;
use serde_json::Value;
use serde_with::{DefaultOnError, serde_as};
use tracing::warn;

use super::log::Log;

/// Paginated wrapper the service uses for the logs collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEnvelope {
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Log>,
}

// Rows stay raw; `decode_rows` decodes each one on its own.
#[serde_as]
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    count: Option<u64>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    next: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    previous: Option<String>,
    results: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListingShape {
    Envelope(RawEnvelope),
    Bare(Vec<Value>),
}

/// Every shape the list endpoint has been seen to return. The envelope is
/// canonical; the bare array is accepted for older deployments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogListing {
    Envelope(LogEnvelope),
    Bare(Vec<Log>),
    /// Anything else. Never an error.
    Empty,
}

impl LogListing {
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<ListingShape>(value) {
            Ok(ListingShape::Envelope(raw)) => Self::Envelope(LogEnvelope {
                count: raw.count,
                next: raw.next,
                previous: raw.previous,
                results: decode_rows(raw.results),
            }),
            Ok(ListingShape::Bare(rows)) => Self::Bare(decode_rows(rows)),
            Err(_) => Self::Empty,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Empty)
    }

    pub fn into_logs(self) -> Vec<Log> {
        match self {
            Self::Envelope(envelope) => envelope.results,
            Self::Bare(logs) => logs,
            Self::Empty => Vec::new(),
        }
    }
}

fn decode_rows(rows: Vec<Value>) -> Vec<Log> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Log>(row) {
            Ok(log) => Some(log),
            Err(err) => {
                warn!(index, error = %err, "skipping log entry that does not decode");
                None
            }
        })
        .collect()
}
