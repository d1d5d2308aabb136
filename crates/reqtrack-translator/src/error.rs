// SPDX-License-Identifier: BUSL-1.1
//! Translator client error types.
//!
//! Two families: transport failures (the endpoint could not be reached or
//! answered with a non-2xx status) and protocol failures (the body did not
//! decode into the shape the caller needed). None of these escape the
//! `translate_*` operations; they are folded into `{status: error}` payloads
//! there.

use crate::config::ConfigError;

/// Errors from building, sending, or decoding an XML-RPC call.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The translator endpoint could not be reached.
    #[error("Translator service unreachable at {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout.
    #[error("Translator service at {endpoint} timed out")]
    Timeout { endpoint: String },

    /// The translator endpoint answered with a non-2xx status.
    #[error("Translator service at {endpoint} returned HTTP {status}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body is not well-formed XML. The parser's complaint is
    /// kept in `detail` for logging; the message shown to users is fixed.
    #[error("Invalid response from translator service")]
    InvalidXml { detail: String },

    /// The XML parsed but lacks the `methodResponse/params/param/value` path.
    /// Wire-level `<fault>` documents land here as well.
    #[error("Malformed response from translator service")]
    MalformedResponse,

    /// An inbound `<methodCall>` lacks its root or `<methodName>`.
    #[error("Malformed XML-RPC method call")]
    MalformedCall,

    /// The decoded value is not the variant the call site requires.
    #[error("Unexpected response shape from translator service: expected {expected}, got {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    /// The client could not be built from its configuration.
    #[error("translator client configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RpcError {
    /// Whether this error originated below the protocol layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::HttpStatus { .. }
        )
    }
}
