//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Branding asset toolkit: app icon/logo conversion and landing page preview
#[derive(Parser, Debug)]
#[command(name = "assetkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert build/icon.png into build/icon.ico and an optimized PNG
    Icon,

    /// Convert logo.webp into logo.png and build/icon.ico
    Logo,

    /// Serve the landing page on port 8080 with caching disabled
    Serve,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
