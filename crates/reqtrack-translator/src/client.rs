// SPDX-License-Identifier: BUSL-1.1
//! # Translator Client
//!
//! Typed access to the three procedures the translator service exposes.
//!
//! ## Return contract
//!
//! [`TranslatorClient::call`] and [`TranslatorClient::call_struct`] return
//! `Result`. The `translate_*` / `get_supported_languages` operations do not:
//! they hand back the decoded struct verbatim on success, or a synthetic
//! `{status: "error", message}` struct when transport or decoding failed.
//! Callers distinguish the two by the `status` member, exactly as they do for
//! application errors the service itself reports. The client never looks at
//! `status` in a successful response.

use std::time::Duration;

use url::Url;

use crate::config::TranslatorConfig;
use crate::decode::decode_response;
use crate::encode::build_request;
use crate::error::RpcError;
use crate::transport::HttpTransport;
use crate::value::{Struct, Value};

/// Procedure translating a whole requirement record.
pub const TRANSLATE_REQUIREMENT: &str = "translate_requirement";

/// Procedure translating a free-standing text.
pub const TRANSLATE_TEXT: &str = "translate_text";

/// Procedure listing the languages the service can target.
pub const GET_SUPPORTED_LANGUAGES: &str = "get_supported_languages";

/// Client for the translator service's XML-RPC endpoint.
#[derive(Debug, Clone)]
pub struct TranslatorClient {
    transport: HttpTransport,
    endpoint: Url,
}

impl TranslatorClient {
    /// Create a client from configuration. No connection is made here.
    pub fn new(config: TranslatorConfig) -> Result<Self, RpcError> {
        let endpoint = config.endpoint_url()?;
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self {
            transport,
            endpoint,
        })
    }

    /// The XML-RPC endpoint this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Invoke `method` with positional `params` and decode the return value.
    pub async fn call(&self, method: &str, params: &[Value]) -> Result<Value, RpcError> {
        let body = build_request(method, params);
        tracing::debug!(
            method,
            endpoint = %self.endpoint,
            params = params.len(),
            "calling translator"
        );

        let raw = self.transport.send(&self.endpoint, body).await?;
        decode_response(&raw).map_err(|e| {
            if let RpcError::InvalidXml { detail } = &e {
                tracing::warn!(method, %detail, "translator returned unparsable XML");
            }
            e
        })
    }

    /// Like [`call`](Self::call), but the return value must be a struct.
    pub async fn call_struct(&self, method: &str, params: &[Value]) -> Result<Struct, RpcError> {
        self.call(method, params)
            .await?
            .into_struct()
            .map_err(|other| RpcError::UnexpectedShape {
                expected: "struct",
                found: other.kind(),
            })
    }

    /// Translate a requirement record (with its indicators) into `target_lang`.
    pub async fn translate_requirement(
        &self,
        requirement: impl Into<Value>,
        target_lang: &str,
    ) -> Struct {
        let params = [requirement.into(), Value::from(target_lang)];
        into_payload(
            TRANSLATE_REQUIREMENT,
            self.call_struct(TRANSLATE_REQUIREMENT, &params).await,
        )
    }

    /// Translate `text` from `source_lang` into `target_lang`.
    pub async fn translate_text(&self, text: &str, target_lang: &str, source_lang: &str) -> Struct {
        let params = [
            Value::from(text),
            Value::from(target_lang),
            Value::from(source_lang),
        ];
        into_payload(TRANSLATE_TEXT, self.call_struct(TRANSLATE_TEXT, &params).await)
    }

    /// List the languages the service supports.
    pub async fn get_supported_languages(&self) -> Struct {
        into_payload(
            GET_SUPPORTED_LANGUAGES,
            self.call_struct(GET_SUPPORTED_LANGUAGES, &[]).await,
        )
    }
}

fn into_payload(method: &str, result: Result<Struct, RpcError>) -> Struct {
    match result {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(method, error = %e, "translator call failed");
            error_payload(e.to_string())
        }
    }
}

/// The local error shape: `{status: "error", message}`.
pub fn error_payload(message: impl Into<String>) -> Struct {
    let mut payload = Struct::new();
    payload.insert("status".into(), Value::from("error"));
    payload.insert("message".into(), Value::String(message.into()));
    payload
}

/// Whether `payload` carries `status: "error"`, local or remote.
pub fn is_error_payload(payload: &Struct) -> bool {
    payload.get("status").and_then(Value::as_str) == Some("error")
}

/// HTTP status the request layer answers with for `payload`: 500 for error
/// payloads, 200 otherwise.
pub fn http_status_for(payload: &Struct) -> u16 {
    if is_error_payload(payload) {
        500
    } else {
        200
    }
}
