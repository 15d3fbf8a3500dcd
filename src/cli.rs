//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// VisionCut head snapshot generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: visioncut.toml)
    #[arg(short = 'C', long, default_value = "visioncut.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a head snapshot for every route
    Build {
        /// Output directory path (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,
    },

    /// List every published route
    Routes {
        /// Page number to show (1-based); all routes when omitted
        #[arg(short, long)]
        page: Option<usize>,

        /// Routes per page
        #[arg(long = "per-page", default_value_t = 20)]
        per_page: usize,
    },

    /// Search blog posts by title, excerpt, or tag
    Search {
        /// Search term (case-insensitive)
        query: String,
    },

    /// Report catalog counts and the aggregate review rating
    Check,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_routes(&self) -> bool {
        matches!(self.command, Commands::Routes { .. })
    }
    pub const fn is_search(&self) -> bool {
        matches!(self.command, Commands::Search { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}
