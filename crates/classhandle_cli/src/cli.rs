//! Command-line surface.

use clap::{Parser, Subcommand, ValueEnum};
use classhandle_core::{EntryId, ResourceKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "classhandle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// JSON file holding categories and entries
    #[arg(long, global = true, env = "CLASSHANDLE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "CLASSHANDLE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, global = true, env = "CLASSHANDLE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Manage study entries
    Entry {
        #[clap(subcommand)]
        entry_command: EntryCommand,
    },
    /// Manage categories
    Category {
        #[clap(subcommand)]
        category_command: CategoryCommand,
    },
    /// Show total and viewed counts
    Summary {
        /// Category to count, or "All Classes"
        #[arg(long, short)]
        category: Option<String>,
    },
}

#[derive(Subcommand, Clone)]
pub enum EntryCommand {
    /// Add an entry
    Add {
        #[arg(long, short)]
        category: String,
        #[arg(long, short)]
        description: String,
        /// Local PDF path
        #[arg(long)]
        pdf: Option<String>,
        /// Video URL
        #[arg(long)]
        video: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Edit an entry; omitted fields keep their current value
    Edit {
        id: EntryId,
        #[arg(long, short)]
        category: Option<String>,
        #[arg(long, short)]
        description: Option<String>,
        #[arg(long)]
        pdf: Option<String>,
        #[arg(long)]
        video: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove an entry
    Remove { id: EntryId },
    /// Flip an entry's viewed flag
    Toggle { id: EntryId },
    /// Show every field of an entry
    Show { id: EntryId },
    /// List entries sorted by description
    List {
        /// Category to show, or "All Classes"
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Print the validated PDF or video target of an entry
    Open { id: EntryId, resource: ResourceArg },
}

#[derive(Subcommand, Clone)]
pub enum CategoryCommand {
    /// Register a category
    Add { name: String },
    /// Unregister a category (entries keep their label)
    Remove { name: String },
    /// List categories alphabetically
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceArg {
    Pdf,
    Video,
}

impl From<ResourceArg> for ResourceKind {
    fn from(value: ResourceArg) -> Self {
        match value {
            ResourceArg::Pdf => ResourceKind::Pdf,
            ResourceArg::Video => ResourceKind::Video,
        }
    }
}
