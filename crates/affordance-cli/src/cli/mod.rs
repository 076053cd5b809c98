//! CLI for building hypermedia links and printing their `Link` header.

mod commands;

use affordance_core::config::{self, AffordanceConfig};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_config_path, run_header, run_routes};

/// Top-level CLI for the affordance tool.
#[derive(Debug, Parser)]
#[command(name = "affordance")]
#[command(about = "Build hypermedia links and render RFC 5988 Link headers", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build one link and print it as a `Link` header line.
    Header(HeaderArgs),

    /// List configured actions and the URLs they resolve to.
    Routes {
        /// Resolve against this request URL instead of the configured base_url.
        #[arg(long, value_name = "URL")]
        base: Option<String>,
    },

    /// Print the path of the config file.
    ConfigPath,
}

#[derive(Debug, Args)]
pub struct HeaderArgs {
    /// Configured action whose route is the link target.
    #[arg(required_unless_present = "href")]
    pub action: Option<String>,

    /// Use this already-resolved URL as the target instead of a route.
    #[arg(long, conflicts_with = "action", value_name = "URL")]
    pub href: Option<String>,

    /// Resolve the action against this request URL instead of the configured base_url.
    #[arg(long, value_name = "URL")]
    pub base: Option<String>,

    /// Link relation; repeat for several (rendered space-separated).
    #[arg(long = "rel", required = true, value_name = "REL")]
    pub rels: Vec<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Extended title (`title*`), passed through as given.
    #[arg(long)]
    pub title_star: Option<String>,

    #[arg(long)]
    pub anchor: Option<String>,

    /// Hinted media type of the target (`type`).
    #[arg(long = "type", value_name = "MEDIA_TYPE")]
    pub media_type: Option<String>,

    #[arg(long)]
    pub media: Option<String>,

    /// Language of the target; repeatable.
    #[arg(long)]
    pub hreflang: Vec<String>,

    /// Link-extension parameter as NAME=VALUE; repeatable, order kept.
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

fn parse_param(s: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {s:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty parameter name in {s:?}"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn load_config(path: Option<&PathBuf>) -> Result<AffordanceConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init().context("failed to load config"),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Header(args) => {
                let cfg = load_config(cli.config.as_ref())?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_header(&cfg, args)?;
            }
            CliCommand::Routes { base } => {
                let cfg = load_config(cli.config.as_ref())?;
                run_routes(&cfg, base.as_deref())?;
            }
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
