//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Generate .env files from .env*.local sources
//! - `init`: Initialize a .hotenvrc.json configuration file

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Directories to search for .env*.local files, relative to the
    /// working directory (default: ./env, or the config file's searchDirs)
    #[arg(value_name = "searchDirs")]
    pub search_dirs: Vec<String>,

    /// Show what would be generated without writing anything
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Back up destination files that would be overwritten, appending the
    /// given suffix (default: .bak)
    #[arg(short, long, value_name = "suffix", num_args = 0..=1, conflicts_with = "force")]
    pub backup: Option<Option<String>>,

    /// Overwrite destination files that hotenv did not generate
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate .env files from .env*.local sources, publishing only
    /// public-prefixed variables
    Generate(GenerateCommand),
    /// Initialize a new .hotenvrc.json configuration file
    Init,
}
