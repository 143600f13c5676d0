//! CLI definitions for LearnKit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// LearnKit CLI.
#[derive(Debug, Parser)]
#[command(name = "learnkit")]
#[command(about = "AI learning assistant: proxy server and command-line client")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Run the proxy server in foreground (default)
    Serve {
        /// Server host (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides server.port and PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Ask a question
    Ask {
        /// The question
        question: String,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Summarize a text of at least 100 characters
    Summarize {
        #[command(flatten)]
        input: TextInput,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Generate a multiple-choice quiz from a text
    Quiz {
        #[command(flatten)]
        input: TextInput,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Generate a learning roadmap for a topic
    Roadmap {
        /// Topic to learn
        topic: String,

        /// Learner level (default: beginner)
        #[arg(long)]
        level: Option<String>,

        #[command(flatten)]
        api: ApiArgs,
    },
}

#[derive(Debug, Args)]
pub(crate) struct ApiArgs {
    /// Proxy API base URL (default: gateway.base_url)
    #[arg(long, env = "LEARNKIT_API_URL")]
    pub api: Option<String>,
}

/// Text given inline or read from a file.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub(crate) struct TextInput {
    /// Text to process
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl TextInput {
    pub fn read(self) -> std::io::Result<String> {
        match (self.text, self.file) {
            (Some(text), _) => Ok(text),
            (None, Some(path)) => std::fs::read_to_string(path),
            (None, None) => Ok(String::new()),
        }
    }
}
