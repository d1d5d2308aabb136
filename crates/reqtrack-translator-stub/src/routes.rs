// SPDX-License-Identifier: BUSL-1.1
//! Route definitions for the translator stub.
//!
//! XML-RPC calls are accepted on `/RPC2` and on the root path, the two paths
//! the real service answers on.

use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use reqtrack_translator::{build_response, parse_method_call};

use crate::procedures::dispatch;

/// Build the complete stub router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/RPC2", post(rpc))
        .route("/", post(rpc))
        .fallback(not_implemented)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn rpc(body: Bytes) -> Response {
    let call = match parse_method_call(&body) {
        Ok(call) => call,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting unparsable call");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };
    let result = dispatch(&call);
    (
        [(header::CONTENT_TYPE, "text/xml")],
        build_response(&result),
    )
        .into_response()
}

async fn not_implemented() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}
