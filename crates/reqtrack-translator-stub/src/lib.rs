// SPDX-License-Identifier: BUSL-1.1
//! Translator service stub.
//!
//! Answers the three procedures `reqtrack-translator` calls, over the same
//! hand-rolled XML-RPC dialect, without performing any translation. Used for
//! local development and for end-to-end tests of the client.

pub mod procedures;
pub mod routes;

pub use routes::router;
