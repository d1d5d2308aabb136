// SPDX-License-Identifier: BUSL-1.1
//! # reqtrack-translator — XML-RPC client for the translator service
//!
//! Requirement text is offloaded to an external translator process that
//! speaks a small subset of XML-RPC over HTTP. This crate holds both halves
//! of that conversation:
//!
//! - [`Value`]: the six-variant RPC value (boolean, int, double, string,
//!   array, struct).
//! - [`encode`]: `<methodCall>` / `<methodResponse>` document builders.
//! - [`decode`]: response and call decoders over a `quick-xml` element tree.
//! - [`transport`]: one `text/xml` POST per call via `reqwest`.
//! - [`client`]: the three translator procedures with their
//!   `{status: "error", message}` failure contract.
//! - [`requirement`]: the requirement/indicator records sent for translation.
//!
//! ## Crate Policy
//!
//! - No retries, no shared mutable state; every call is independent.
//! - The codec never reads the environment. Configuration is passed in.
//! - No `.unwrap()` outside tests.

pub mod client;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod requirement;
pub mod transport;
pub mod value;
mod xml;

pub use client::{error_payload, http_status_for, is_error_payload, TranslatorClient};
pub use config::{ConfigError, TranslatorConfig};
pub use decode::{decode_response, parse_method_call, MethodCall};
pub use encode::{build_request, build_response, encode_value};
pub use error::RpcError;
pub use requirement::{Indicator, IndicatorKind, Requirement, RequirementKind};
pub use value::{Struct, Value};
