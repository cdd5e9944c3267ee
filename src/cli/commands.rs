use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[>] taskdown v", env!("CARGO_PKG_VERSION"), " - tasks in plain markdown"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file to read
    #[arg(long, global = true, default_value = "taskdown.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Toggle the checklist item on a line of a file
    Toggle(ToggleArgs),
    /// Run a query over the tasks in one or more files
    Query(QueryArgs),
    /// Explain what a query will match, without running it
    Explain(ExplainArgs),
}

#[derive(Args)]
pub struct ToggleArgs {
    /// File to edit in place
    pub file: PathBuf,

    /// Line number to toggle (1-based)
    pub line: usize,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Files to gather tasks from
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Query text (filters and `group by` lines, one per line)
    #[arg(long, default_value = "")]
    pub source: String,
}

#[derive(Args)]
pub struct ExplainArgs {
    /// Query text to explain
    #[arg(long, default_value = "")]
    pub source: String,
}
