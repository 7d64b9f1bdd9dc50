use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ask Gemini about your code, optionally grounded in workspace files.
#[derive(Debug, Parser)]
#[command(name = "assist", version)]
pub struct Cli {
    /// Path to a config file (defaults to `<config dir>/assist/config.toml`).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root used for `@workspace` retrieval.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a prompt to the chat model.
    Ask {
        /// Prefix the prompt with the most relevant workspace files.
        #[arg(short, long)]
        workspace: bool,

        /// JSON file holding earlier turns: `[{"role": "user", "text": "..."}]`.
        #[arg(long)]
        history: Option<PathBuf>,

        /// The prompt text.
        prompt: String,
    },

    /// Print the workspace excerpts that would be attached to a query.
    Retrieve {
        /// Free-text query.
        query: String,
    },

    /// Describe an image.
    DescribeImage {
        /// Path to the image file.
        image: PathBuf,

        /// What to ask about the image.
        prompt: String,

        /// MIME type of the image; guessed from the extension when omitted.
        #[arg(long)]
        mime_type: Option<String>,
    },
}
