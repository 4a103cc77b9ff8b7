//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Turn a Markdown-ish document into interlinked plain-text pages
#[derive(Parser, Debug)]
#[command(name = "textquest")]
#[command(about = "Turn a Markdown-ish document into interlinked plain-text pages")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a document and write one text file per section
    Build {
        /// Path to the source document
        input: PathBuf,

        /// Base URL for section links (bare hostnames get http://)
        #[arg(long)]
        hostname: Option<String>,

        /// Destination root shared by link URLs and output paths
        #[arg(short, long)]
        destination: Option<String>,

        /// Output base directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory of per-section ASCII art
        #[arg(long)]
        art: Option<PathBuf>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input text encoding
        #[arg(long)]
        encoding: Option<String>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse a document and report its sections without writing files
    Check {
        /// Path to the source document
        input: PathBuf,

        /// Base URL for section links
        #[arg(long)]
        hostname: Option<String>,

        /// Destination root shared by link URLs and output paths
        #[arg(short, long)]
        destination: Option<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input text encoding
        #[arg(long)]
        encoding: Option<String>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },
}
