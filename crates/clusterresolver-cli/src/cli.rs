use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clusterresolver", about = "Resolve cluster-scoped Tasks and Pipelines")]
pub struct Cli {
    /// Resolver config (TOML). Built-in defaults are used when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the resolver name and selector
    Info,
    /// Check request params without resolving
    Validate {
        /// Request params as KEY=VALUE
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Resolve a resource from a directory-backed store and print it
    Resolve {
        /// Root directory laid out as <namespace>/<kind>s/<name>.json
        #[arg(long)]
        store_dir: PathBuf,
        /// Request params as KEY=VALUE
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

pub fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
    if key.is_empty() {
        return Err(format!("empty key in {s:?}"));
    }
    Ok((key.to_string(), value.to_string()))
}
