// SPDX-License-Identifier: BUSL-1.1
//! # Connection settings
//!
//! Resolves the translator endpoint in three layers, lowest first:
//!
//! 1. Built-in defaults (`translator-service:8001`, 30 s timeout).
//! 2. Environment: `TRANSLATOR_HOST`, `TRANSLATOR_PORT`,
//!    `TRANSLATOR_TIMEOUT_SECS`.
//! 3. Command-line flags `--host`, `--port`, `--timeout-secs`.

use anyhow::{Context, Result};
use clap::Args;

use reqtrack_translator::TranslatorConfig;

pub const ENV_HOST: &str = "TRANSLATOR_HOST";
pub const ENV_PORT: &str = "TRANSLATOR_PORT";
pub const ENV_TIMEOUT_SECS: &str = "TRANSLATOR_TIMEOUT_SECS";

/// Flags overriding the translator endpoint.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Translator host [env: TRANSLATOR_HOST, default: translator-service].
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Translator port [env: TRANSLATOR_PORT, default: 8001].
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Request timeout in seconds [env: TRANSLATOR_TIMEOUT_SECS, default: 30].
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

/// Resolve the client configuration from the process environment and flags.
pub fn resolve(args: &ConnectionArgs) -> Result<TranslatorConfig> {
    resolve_with(args, |key| std::env::var(key).ok())
}

/// Resolve against an arbitrary environment lookup.
pub fn resolve_with(
    args: &ConnectionArgs,
    env: impl Fn(&str) -> Option<String>,
) -> Result<TranslatorConfig> {
    let mut config = TranslatorConfig::default();

    if let Some(host) = env(ENV_HOST).filter(|h| !h.is_empty()) {
        config.host = host;
    }
    if let Some(raw) = env(ENV_PORT) {
        config.port = raw
            .parse()
            .with_context(|| format!("{ENV_PORT} must be a port number, got {raw:?}"))?;
    }
    if let Some(raw) = env(ENV_TIMEOUT_SECS) {
        config.timeout_secs = raw
            .parse()
            .with_context(|| format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"))?;
    }

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    tracing::debug!(
        host = %config.host,
        port = config.port,
        timeout_secs = config.timeout_secs,
        "resolved translator settings"
    );
    Ok(config)
}
