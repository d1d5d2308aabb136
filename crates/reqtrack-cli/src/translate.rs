// SPDX-License-Identifier: BUSL-1.1
//! # Translator subcommands
//!
//! ```bash
//! # Translate a requirement exported from the store:
//! reqtrack translate-requirement --file login.json --lang en
//!
//! # Translate a snippet, letting the service detect the source language:
//! reqtrack translate-text "Benutzer kann sich anmelden" --to en
//!
//! # List target languages:
//! reqtrack languages --host 127.0.0.1
//! ```
//!
//! Every command prints the returned struct as JSON on stdout. The exit code
//! is 0 unless the struct carries `status: "error"`, in which case it is 1.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Args;

use reqtrack_translator::{is_error_payload, Requirement, Struct, TranslatorClient, Value};

/// Arguments for `translate-requirement`.
#[derive(Args, Debug)]
pub struct TranslateRequirementArgs {
    /// JSON file holding one requirement record with its indicators.
    #[arg(long)]
    pub file: PathBuf,

    /// Target language code.
    #[arg(long)]
    pub lang: String,
}

/// Arguments for `translate-text`.
#[derive(Args, Debug)]
pub struct TranslateTextArgs {
    /// Text to translate.
    pub text: String,

    /// Target language code.
    #[arg(long)]
    pub to: String,

    /// Source language code.
    #[arg(long, default_value = "auto")]
    pub from: String,
}

/// Read and validate a requirement record from `path`.
pub fn load_requirement(path: &Path) -> Result<Requirement> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid requirement record", path.display()))
}

fn ensure_lang(flag: &str, code: &str) -> Result<()> {
    ensure!(!code.trim().is_empty(), "{flag} must not be empty");
    Ok(())
}

pub async fn run_translate_requirement(
    args: &TranslateRequirementArgs,
    client: &TranslatorClient,
    out: &mut impl Write,
) -> Result<u8> {
    ensure_lang("--lang", &args.lang)?;
    let requirement = load_requirement(&args.file)?;
    tracing::info!(
        id = requirement.id,
        title = %requirement.title,
        lang = %args.lang,
        "translating requirement"
    );

    let payload = client.translate_requirement(&requirement, &args.lang).await;
    emit(payload, out)
}

pub async fn run_translate_text(
    args: &TranslateTextArgs,
    client: &TranslatorClient,
    out: &mut impl Write,
) -> Result<u8> {
    ensure_lang("--to", &args.to)?;
    let payload = client.translate_text(&args.text, &args.to, &args.from).await;
    emit(payload, out)
}

pub async fn run_languages(client: &TranslatorClient, out: &mut impl Write) -> Result<u8> {
    let payload = client.get_supported_languages().await;
    emit(payload, out)
}

/// Print `payload` as pretty JSON and pick the exit code.
fn emit(payload: Struct, out: &mut impl Write) -> Result<u8> {
    let code = if is_error_payload(&payload) { 1 } else { 0 };
    let json = Value::Struct(payload).to_json();
    writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
    Ok(code)
}
