//! CLI for the outlink exit-page link guard.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use outlink_core::config;
use outlink_core::config::RenderFormat;

use commands::{run_check, run_classify, run_completions, run_langs, run_render};

/// Top-level CLI for the outlink exit-page link guard.
#[derive(Debug, Parser)]
#[command(name = "outlink")]
#[command(about = "outlink: validate outbound links and render the leaving-site page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a destination URL and print its canonical form.
    Check {
        /// Untrusted destination URL.
        url: String,
    },

    /// Classify a hostname as private/internal or public.
    Classify {
        /// Bare hostname or IP literal (IPv6 with or without brackets).
        host: String,
    },

    /// Render the interstitial for a full page query string.
    Render {
        /// Raw query string, e.g. "url=https%3A%2F%2Fexample.com&lang=zh".
        query: String,

        /// Output format: text, html, or json (default from config).
        #[arg(long)]
        format: Option<RenderFormat>,

        /// Comma-separated ranked language preferences, replacing the
        /// LANGUAGE/LC_ALL/LC_MESSAGES/LANG environment lookup.
        #[arg(long, value_name = "TAGS")]
        prefer: Option<String>,
    },

    /// List supported interstitial languages.
    Langs,

    /// Generate shell completions.
    Completions {
        /// Shell to generate for.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url } => run_check(&url)?,
            CliCommand::Classify { host } => run_classify(&host),
            CliCommand::Render {
                query,
                format,
                prefer,
            } => run_render(&cfg, &query, format, prefer.as_deref())?,
            CliCommand::Langs => run_langs(),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}
