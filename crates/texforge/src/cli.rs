//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "texforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to texforge.toml (defaults to ./texforge.toml when present)
    #[arg(long, global = true, env = "TEXFORGE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template with variables from a JSON, YAML or TOML file
    Render(RenderArgs),

    /// Detect the document type of a template
    Detect {
        /// Template file to inspect
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Show variables loaded from a file
    Vars {
        /// Variables file (.json, .yaml, .yml or .toml)
        file: PathBuf,

        /// Print a single value by dotted path (e.g. "author.name")
        #[arg(long)]
        get: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct RenderArgs {
    /// Template file
    pub template: PathBuf,

    /// Variables file (.json, .yaml, .yml or .toml)
    #[arg(long)]
    pub vars: PathBuf,

    /// Document type tag (detected from the template when omitted)
    #[arg(long = "type")]
    pub doc_type: Option<String>,

    /// Opening placeholder delimiter
    #[arg(long)]
    pub left: Option<String>,

    /// Closing placeholder delimiter
    #[arg(long)]
    pub right: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reject variables that fail typed validation
    #[arg(long)]
    pub strict: bool,

    /// Keep nested objects as single variables instead of dotted keys
    #[arg(long)]
    pub no_flatten: bool,
}
