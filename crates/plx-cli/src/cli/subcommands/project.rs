use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Record step-one details and print the route of the creation step.
    Draft {
        #[arg(long)]
        name: String,
        #[arg(long)]
        creator: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Create a project and wait until its sources are scraped.
    Create(CreateArgs),
    /// Show a project with its status, models, scraped data, and history.
    Show { id: String },
    /// Show a project's scrape status.
    Status { id: String },
    /// Poll an existing project until it is ready.
    Watch { id: String },
    /// List scraped files, or print one with `--file`.
    Scraped {
        id: String,
        #[arg(long)]
        file: Option<String>,
        /// Restrict `--file` lookup to one variant.
        #[arg(long)]
        variant: Option<String>,
    },
    /// List past queries, or replay one with `--item`.
    History {
        id: String,
        #[arg(long)]
        item: Option<String>,
        /// Order by neutrality score, highest first, instead of by time.
        #[arg(long, conflicts_with = "item")]
        by_score: bool,
    },
}

/// Arguments for `plx project create`.
#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Output of `plx project draft` (route or bare query string).
    #[arg(long)]
    pub draft: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub creator: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Comma-separated tags.
    #[arg(long)]
    pub tags: Option<String>,
    /// Snippet or URL for variant A. Repeatable.
    #[arg(long)]
    pub variant_a: Vec<String>,
    /// File whose contents become one variant A snippet. Repeatable.
    #[arg(long)]
    pub variant_a_file: Vec<PathBuf>,
    /// Snippet or URL for variant B. Repeatable.
    #[arg(long)]
    pub variant_b: Vec<String>,
    /// File whose contents become one variant B snippet. Repeatable.
    #[arg(long)]
    pub variant_b_file: Vec<PathBuf>,
    /// Print the new project id instead of waiting for it to be ready.
    #[arg(long)]
    pub no_wait: bool,
}
