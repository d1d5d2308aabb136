// SPDX-License-Identifier: BUSL-1.1
//! HTTP transport for XML-RPC documents.
//!
//! One POST per call, no retries. The timeout is fixed when the transport is
//! built; a hung translator fails the call once the timeout elapses.

use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use url::Url;

use crate::config::ConfigError;
use crate::error::RpcError;

/// Posts request documents and returns raw response bodies.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    /// POST `body` to `endpoint` as `text/xml` and return the response bytes.
    ///
    /// Non-2xx statuses are failures; the body is kept for diagnostics.
    pub async fn send(&self, endpoint: &Url, body: String) -> Result<Vec<u8>, RpcError> {
        let resp = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("text/xml"))
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RpcError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| transport_error(endpoint, e))?;
        Ok(bytes.to_vec())
    }
}

fn transport_error(endpoint: &Url, source: reqwest::Error) -> RpcError {
    if source.is_timeout() {
        RpcError::Timeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        RpcError::Transport {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}
