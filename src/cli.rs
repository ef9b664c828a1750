//! Command-line flags.

use crate::shared::config::CliOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "meeting-summarizer", version)]
#[command(about = "Upload meeting audio and get a summary, transcript and action items")]
pub struct Cli {
    /// Audio file to summarize. Without it an interactive menu starts.
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Backend origin, e.g. http://localhost:5000
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Skip the welcome banner.
    #[arg(long)]
    pub no_banner: bool,

    /// Use the offline mock backend.
    #[arg(long)]
    pub mock: bool,
}

impl Cli {
    pub fn to_overrides(&self) -> CliOverrides {
        CliOverrides {
            base_url: self.base_url.clone(),
            mock: self.mock,
        }
    }

    /// Banner only makes sense in front of the interactive menu.
    pub fn show_banner(&self) -> bool {
        self.file.is_none() && !self.no_banner
    }
}
