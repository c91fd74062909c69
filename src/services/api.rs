use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::models::{Log, LogDraft};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("invalid request URL for {path:?}: {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub(crate) fn from_transport(url: &Url, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for the `/logs/` resource. Built once from an [`ApiConfig`] and
/// handed to whoever needs it; one attempt per call, no retries.
#[derive(Clone, Debug)]
pub struct LogsApi {
    http: Client,
    config: ApiConfig,
}

impl LogsApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Raw list body. Callers decode it with [`crate::models::LogListing`].
    pub async fn list_logs(&self) -> Result<Value, ApiError> {
        let (url, request) = self.request(Method::GET, "logs/")?;
        let response = execute(&url, request).await?;
        read_json(&url, response).await
    }

    pub async fn get_log(&self, id: u64) -> Result<Log, ApiError> {
        let (url, request) = self.request(Method::GET, &log_path(id))?;
        let response = execute(&url, request).await?;
        read_json(&url, response).await
    }

    pub async fn create_log(&self, draft: &LogDraft) -> Result<Log, ApiError> {
        let (url, request) = self.request(Method::POST, "logs/")?;
        let response = execute(&url, request.json(draft)).await?;
        read_json(&url, response).await
    }

    pub async fn update_log(&self, id: u64, draft: &LogDraft) -> Result<Log, ApiError> {
        let (url, request) = self.request(Method::PUT, &log_path(id))?;
        let response = execute(&url, request.json(draft)).await?;
        read_json(&url, response).await
    }

    pub async fn delete_log(&self, id: u64) -> Result<(), ApiError> {
        let (url, request) = self.request(Method::DELETE, &log_path(id))?;
        execute(&url, request).await?;
        Ok(())
    }

    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<(Url, RequestBuilder), ApiError> {
        let url = self
            .config
            .endpoint(path)
            .map_err(|source| ApiError::InvalidUrl {
                path: path.to_string(),
                source,
            })?;
        info!(%method, %url, "sending request");
        let request = self.http.request(method, url.clone());
        Ok((url, request))
    }
}

fn log_path(id: u64) -> String {
    format!("logs/{id}/")
}

async fn execute(url: &Url, request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|err| {
        warn!(%url, error = %err, "request failed before a response arrived");
        ApiError::from_transport(url, err)
    })?;

    let status = response.status();
    debug!(%url, %status, "response received");
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(%url, %status, "request rejected by server");
        return Err(ApiError::Status {
            url: url.to_string(),
            status,
            body,
        });
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|err| {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else {
            ApiError::Decode {
                url: url.to_string(),
                source: err,
            }
        }
    })
}
