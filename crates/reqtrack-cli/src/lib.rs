// SPDX-License-Identifier: BUSL-1.1
//! # reqtrack-cli — command-line access to the translator service
//!
//! ## Subcommands
//!
//! - `reqtrack translate-requirement` — translate a requirement record.
//! - `reqtrack translate-text` — translate a free-standing text.
//! - `reqtrack languages` — list supported target languages.
//!
//! Connection flags and `TRANSLATOR_*` environment variables are resolved
//! by [`settings`].

pub mod settings;
pub mod translate;
