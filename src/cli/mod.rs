pub mod comment;
pub mod parse;

use std::fs;
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mapref",
    about = "Locate and decode sourceMappingURL comments",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the source map reference of each file as JSON
    Parse {
        /// File path(s) to inspect ("-" reads stdin)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print a sourceMappingURL comment
    Comment {
        /// Point at an external source map
        #[arg(long, conflicts_with = "inline", required_unless_present = "inline")]
        url: Option<String>,
        /// Embed this JSON source map as a base64 data URI
        #[arg(long)]
        inline: Option<PathBuf>,
        /// Use /* */ instead of //
        #[arg(long)]
        block: bool,
    },
}

/// Read a whole file as bytes, with `-` meaning stdin.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    tracing::debug!("Reading {}", path.display());
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
