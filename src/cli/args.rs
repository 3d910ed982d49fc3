//! CLI argument definitions using clap.
//!
//! polydoc takes a single positional argument, the directory to scan.
//! Everything else is optional so that `polydoc <ROOT>` on its own
//! translates and rewrites every comment block below ROOT.

use std::path::PathBuf;

use clap::Parser;

use crate::translate::DEFAULT_API_URL;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan for documentation comments
    pub root: PathBuf,

    /// Report blocks that would change without translating or writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (default: nearest .polydocrc.json at or above ROOT)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Google Cloud Translation API key
    #[arg(long, env = "POLYDOC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Translation API endpoint
    #[arg(long, env = "POLYDOC_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
