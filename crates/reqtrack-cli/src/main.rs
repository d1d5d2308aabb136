// SPDX-License-Identifier: BUSL-1.1
//! # reqtrack CLI entry point
//!
//! Parses command-line arguments, resolves translator settings, and
//! dispatches to subcommand handlers on a single-threaded runtime.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reqtrack_cli::settings::{self, ConnectionArgs};
use reqtrack_cli::translate::{
    run_languages, run_translate_requirement, run_translate_text, TranslateRequirementArgs,
    TranslateTextArgs,
};
use reqtrack_translator::TranslatorClient;

/// reqtrack — requirement translation from the command line.
#[derive(Parser, Debug)]
#[command(name = "reqtrack", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a requirement record (with indicators) read from a JSON file.
    TranslateRequirement(TranslateRequirementArgs),

    /// Translate a free-standing text.
    TranslateText(TranslateTextArgs),

    /// List the languages the translator supports.
    Languages,
}

/// Exit code for local failures (bad flags, unreadable input).
const USAGE_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(USAGE_FAILURE)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = settings::resolve(&cli.connection)?;
    let client = TranslatorClient::new(config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut stdout = std::io::stdout().lock();
    runtime.block_on(async {
        match &cli.command {
            Commands::TranslateRequirement(args) => {
                run_translate_requirement(args, &client, &mut stdout).await
            }
            Commands::TranslateText(args) => run_translate_text(args, &client, &mut stdout).await,
            Commands::Languages => run_languages(&client, &mut stdout).await,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_translate_requirement() {
        let cli = Cli::try_parse_from([
            "reqtrack",
            "translate-requirement",
            "--file",
            "req.json",
            "--lang",
            "en",
        ])
        .unwrap();
        if let Commands::TranslateRequirement(args) = cli.command {
            assert_eq!(args.file, std::path::PathBuf::from("req.json"));
            assert_eq!(args.lang, "en");
        } else {
            panic!("expected translate-requirement");
        }
    }

    #[test]
    fn cli_parse_translate_text_defaults_source_to_auto() {
        let cli =
            Cli::try_parse_from(["reqtrack", "translate-text", "Hallo", "--to", "en"]).unwrap();
        if let Commands::TranslateText(args) = cli.command {
            assert_eq!(args.text, "Hallo");
            assert_eq!(args.to, "en");
            assert_eq!(args.from, "auto");
        } else {
            panic!("expected translate-text");
        }
    }

    #[test]
    fn cli_parse_connection_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "reqtrack",
            "languages",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Languages));
        assert_eq!(cli.connection.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.connection.port, Some(9000));
        assert_eq!(cli.connection.timeout_secs, Some(3));
    }

    #[test]
    fn cli_parse_verbosity_count() {
        let cli = Cli::try_parse_from(["reqtrack", "-vv", "languages"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_requires_lang_for_requirement() {
        let parsed = Cli::try_parse_from(["reqtrack", "translate-requirement", "--file", "r.json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn cli_rejects_bad_port() {
        assert!(Cli::try_parse_from(["reqtrack", "languages", "--port", "99999"]).is_err());
    }
}
