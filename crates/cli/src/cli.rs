use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::commands::{absolutize_command, cwd_command, normalize_command};
use crate::config::build_normalizer;
use crate::display::{render_json, render_plain};

/// Normalize and absolutize paths into stable, comparable keys
#[derive(Parser, Debug)]
#[command(name = "pathnorm")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Settings file to use instead of searching for .pathnorm.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Working directory to anchor relative paths to (defaults to the current directory)
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fold separators and resolve `.` and `..` segments
    #[command(visible_alias = "n")]
    Normalize {
        /// Paths to normalize
        #[arg(required = true)]
        paths: Vec<String>,

        /// Separator to join segments with (defaults to the host separator)
        #[arg(short, long)]
        separator: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Anchor relative paths to the working directory
    #[command(visible_alias = "a")]
    Absolutize {
        /// Paths to absolutize
        #[arg(required = true)]
        paths: Vec<String>,

        /// Also normalize the result
        #[arg(short, long)]
        normalize: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the normalized working directory
    Cwd,
}

impl Cli {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        debug!("Executing {:?}", self.command);

        let normalizer = build_normalizer(self.config.as_deref(), self.cwd.as_deref())?;

        let output = match self.command {
            Commands::Normalize {
                paths,
                separator,
                json,
            } => {
                let reports = normalize_command(&normalizer, &paths, separator.as_deref());
                if json { render_json(&reports)? } else { render_plain(&reports) }
            }
            Commands::Absolutize {
                paths,
                normalize,
                json,
            } => {
                let reports = absolutize_command(&normalizer, &paths, normalize);
                if json { render_json(&reports)? } else { render_plain(&reports) }
            }
            Commands::Cwd => cwd_command(&normalizer),
        };

        println!("{output}");
        Ok(())
    }
}
