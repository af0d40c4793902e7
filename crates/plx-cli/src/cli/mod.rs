use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `plx` binary.
#[derive(Debug, Parser)]
#[command(
    name = "plx",
    version,
    about = "Parallax - compare how models weigh two knowledge bases"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress and non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::ProjectCommands;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn table_is_the_default_format() {
        let cli = Cli::try_parse_from(["plx", "projects"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::Projects));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["plx", "models", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Models));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["plx", "--format", "xml", "projects"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn create_collects_repeated_variants() {
        let cli = Cli::try_parse_from([
            "plx",
            "project",
            "create",
            "--draft",
            "project_name=Rates&creator_name=ana",
            "--variant-a",
            "Rates should fall.",
            "--variant-a",
            "Inflation is easing.",
            "--variant-b-file",
            "notes/b.txt",
            "--no-wait",
        ])
        .expect("cli should parse");

        let Commands::Project {
            action: ProjectCommands::Create(args),
        } = cli.command
        else {
            panic!("expected project create");
        };
        assert_eq!(
            args.draft.as_deref(),
            Some("project_name=Rates&creator_name=ana")
        );
        assert_eq!(args.variant_a, vec!["Rates should fall.", "Inflation is easing."]);
        assert_eq!(args.variant_b_file, vec![PathBuf::from("notes/b.txt")]);
        assert!(args.no_wait);
    }

    #[test]
    fn query_takes_project_and_text() {
        let cli = Cli::try_parse_from([
            "plx",
            "query",
            "p1",
            "--model",
            "single_judge",
            "Who benefits from lower rates?",
        ])
        .expect("cli should parse");

        let Commands::Query(args) = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.project_id, "p1");
        assert_eq!(args.model.as_deref(), Some("single_judge"));
        assert_eq!(args.text, "Who benefits from lower rates?");
    }

    #[test]
    fn draft_requires_name_and_creator() {
        assert!(Cli::try_parse_from(["plx", "project", "draft", "--name", "Rates"]).is_err());
        let cli = Cli::try_parse_from([
            "plx", "project", "draft", "--name", "Rates", "--creator", "ana",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Project {
                action: ProjectCommands::Draft { .. }
            }
        ));
    }

    #[test]
    fn history_can_be_ordered_by_score() {
        let cli = Cli::try_parse_from(["plx", "project", "history", "p1", "--by-score"])
            .expect("cli should parse");
        let Commands::Project {
            action: ProjectCommands::History { id, by_score, .. },
        } = cli.command
        else {
            panic!("expected project history");
        };
        assert_eq!(id, "p1");
        assert!(by_score);

        assert!(
            Cli::try_parse_from(["plx", "project", "history", "p1", "--by-score", "--item", "h1"])
                .is_err()
        );
    }
}
