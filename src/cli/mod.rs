//! CLI argument parsing for diffscan.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::OutputFormat;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Diffscan: turn git's diff and change-summary output into structured data.
///
/// Each command reads raw git output from a file or stdin and prints the
/// parsed result. Diffscan never runs git itself.
#[derive(Parser, Debug)]
#[command(name = "diffscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of `./.diffscan.yaml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for diffscan.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a multi-file unified diff (`git diff`).
    ///
    /// Prints every file section with its hunks and per-line states.
    Diff(DiffArgs),

    /// Parse the hunks of a single file's diff body.
    Hunks(DiffArgs),

    /// Parse NUL-delimited name-status records (`git diff --name-status -z`).
    NameStatus(RecordArgs),

    /// Parse numstat plus summary output (`git apply --numstat --summary -z`).
    ApplySummary(RecordArgs),

    /// Parse a one-line change summary (`git diff --shortstat`).
    ShortStat(InputArgs),

    /// List every added or changed line of a unified diff with its line number.
    AddedLines(InputArgs),
}

/// Input and output options shared by every command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// File holding git output; `-` reads stdin.
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Output format (defaults to the config's `format`).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `diff` and `hunks` commands.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub io: InputArgs,

    /// Keep verbatim input text on the parsed result.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for commands producing file change records.
#[derive(Args, Debug)]
pub struct RecordArgs {
    #[command(flatten)]
    pub io: InputArgs,

    /// Repository path stamped on each record (defaults to the config's `repo_path`).
    #[arg(long)]
    pub repo_path: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_diff_defaults() {
        let cli = Cli::try_parse_from(["diffscan", "diff"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.io.input, "-");
            assert_eq!(args.io.format, None);
            assert!(!args.raw);
        } else {
            panic!("Expected Diff command");
        }
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_diff_full() {
        let cli = Cli::try_parse_from([
            "diffscan",
            "-vv",
            "--config",
            "custom.yaml",
            "diff",
            "--input",
            "change.diff",
            "--format",
            "yaml",
            "--raw",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.io.input, "change.diff");
            assert_eq!(args.io.format, Some(OutputFormat::Yaml));
            assert!(args.raw);
        } else {
            panic!("Expected Diff command");
        }
    }

    #[test]
    fn parse_name_status_with_repo_path() {
        let cli =
            Cli::try_parse_from(["diffscan", "name-status", "--repo-path", "/srv/repo"]).unwrap();
        if let Command::NameStatus(args) = cli.command {
            assert_eq!(args.repo_path.as_deref(), Some("/srv/repo"));
        } else {
            panic!("Expected NameStatus command");
        }
    }

    #[test]
    fn parse_remaining_commands() {
        let cli = Cli::try_parse_from(["diffscan", "apply-summary"]).unwrap();
        assert!(matches!(cli.command, Command::ApplySummary(_)));

        let cli = Cli::try_parse_from(["diffscan", "short-stat", "-i", "stat.txt"]).unwrap();
        assert!(matches!(cli.command, Command::ShortStat(ref args) if args.input == "stat.txt"));

        let cli = Cli::try_parse_from(["diffscan", "hunks", "--raw"]).unwrap();
        assert!(matches!(cli.command, Command::Hunks(ref args) if args.raw));

        let cli = Cli::try_parse_from(["diffscan", "added-lines"]).unwrap();
        assert!(matches!(cli.command, Command::AddedLines(_)));
    }

    #[test]
    fn reject_unknown_format() {
        assert!(Cli::try_parse_from(["diffscan", "diff", "--format", "xml"]).is_err());
    }
}
