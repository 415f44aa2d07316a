//! CLI for the urlnorm URL canonicalizer.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use urlnorm_core::config::{self, NormalizeOptions};
use urlnorm_core::{NormalizeError, ParamAllowlist};

use commands::run_normalize;

/// Top-level CLI for the urlnorm URL canonicalizer.
#[derive(Debug, Parser)]
#[command(name = "urlnorm", version, disable_version_flag = true)]
#[command(about = "Canonicalize URLs so equivalent forms compare equal", long_about = None)]
pub struct Cli {
    /// Print version and exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize a single URL and print the canonical form.
    Normalize {
        /// URL to normalize.
        url: String,

        /// Scheme to attach when the URL has none.
        #[arg(short = 's', long, value_name = "SCHEME")]
        default_scheme: Option<String>,

        /// Charset for percent-decoded text (only utf-8 is supported).
        #[arg(short = 'c', long, value_name = "CHARSET")]
        charset: Option<String>,

        /// Drop query parameters not present in the allowlist.
        #[arg(short = 'f', long)]
        filter_params: bool,

        /// Comma-separated parameter names allowed for every host.
        #[arg(short = 'p', long, value_name = "NAMES")]
        param_allowlist: Option<String>,

        /// Domain to attach to host-less absolute paths.
        #[arg(short = 'd', long, value_name = "DOMAIN")]
        default_domain: Option<String>,

        /// Keep query parameters in their original order.
        #[arg(long)]
        no_sort_query_params: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Config file first, flags on top.
        let base = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", base);

        match cli.command {
            CliCommand::Normalize {
                url,
                default_scheme,
                charset,
                filter_params,
                param_allowlist,
                default_domain,
                no_sort_query_params,
            } => {
                let options = merge_options(
                    base,
                    default_scheme,
                    charset,
                    filter_params,
                    param_allowlist,
                    default_domain,
                    no_sort_query_params,
                );
                run_normalize(&options, &url)?;
            }
        }

        Ok(())
    }
}

/// Stderr line for a failed run. Normalization failures keep the historic
/// `Error normalizing URL:` prefix; config and logging failures get a
/// neutral one.
pub fn error_message(err: &anyhow::Error) -> String {
    if err.downcast_ref::<NormalizeError>().is_some() {
        format!("Error normalizing URL: {err:#}")
    } else {
        format!("Error: {err:#}")
    }
}

fn merge_options(
    mut options: NormalizeOptions,
    default_scheme: Option<String>,
    charset: Option<String>,
    filter_params: bool,
    param_allowlist: Option<String>,
    default_domain: Option<String>,
    no_sort_query_params: bool,
) -> NormalizeOptions {
    if let Some(scheme) = default_scheme {
        options.default_scheme = scheme;
    }
    if let Some(charset) = charset {
        options.charset = charset;
    }
    if filter_params {
        options.filter_params = true;
    }
    if let Some(names) = param_allowlist {
        options.param_allowlist = Some(ParamAllowlist::Flat(
            names
                .split(',')
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        ));
    }
    if let Some(domain) = default_domain {
        options.default_domain = Some(domain);
    }
    if no_sort_query_params {
        options.sort_query_params = false;
    }
    options
}
