use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tarakan",
    version,
    about = "Tika-backed text extraction for content indexing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract plain text from a file and print it to stdout.
    Extract {
        /// Path to the document to read.
        file: PathBuf,

        /// Declared MIME type of the document.
        #[arg(short, long, default_value = "application/octet-stream")]
        media_type: String,
    },

    /// Probe the configured java and Tika paths.
    Validate,
}
