use clap::{Args, Subcommand};

use crate::cli::subcommands::ProjectCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List all projects.
    Projects,
    /// Create, inspect, and watch projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// List available analysis methods.
    Models,
    /// Ask a model how a question leans between the project's variants.
    Query(QueryArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `plx query`.
#[derive(Clone, Debug, Args)]
pub struct QueryArgs {
    pub project_id: String,
    /// Analysis method (defaults to `general.default_model`, else the first listed).
    #[arg(long)]
    pub model: Option<String>,
    pub text: String,
}

/// Arguments for `plx schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered type name, e.g. `query_response`.
    pub type_name: String,
}
