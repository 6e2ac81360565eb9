//! Command implementations for diffscan.
//!
//! Every command reads git output, hands it to one parser, filters
//! file-level results through the configured path globs, and renders the
//! result. `dispatch` prints; `run` returns the rendered text.

mod input;
mod output;


use crate::cli::{Cli, Command, DiffArgs, InputArgs, RecordArgs};
use crate::config::{Config, OutputFormat, PathFilter};
use crate::diff::{
    parse_apply_summary, parse_diff, parse_file_diff, parse_name_status, parse_short_stat,
    FileChangeRecord,
};
use crate::error::Result;
use log::info;
use std::path::Path;

use input::read_input;
use output::{render, write_stdout};

/// Dispatch a command to its implementation and print the result.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let rendered = run(cli.command, &config)?;
    write_stdout(&rendered)
}

/// Load the explicit config file, or discover one in the working directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(std::env::current_dir()?),
    }
}

/// Execute a command and return its rendered output.
pub fn run(command: Command, config: &Config) -> Result<String> {
    let filter = config.path_filter()?;

    match command {
        Command::Diff(args) => cmd_diff(args, config, &filter),
        Command::Hunks(args) => cmd_hunks(args, config),
        Command::NameStatus(args) => cmd_name_status(args, config, &filter),
        Command::ApplySummary(args) => cmd_apply_summary(args, config, &filter),
        Command::ShortStat(args) => cmd_short_stat(args, config),
        Command::AddedLines(args) => cmd_added_lines(args, config, &filter),
    }
}

fn cmd_diff(args: DiffArgs, config: &Config, filter: &PathFilter) -> Result<String> {
    let data = read_input(&args.io.input)?;
    let mut parsed = parse_diff(&data, args.raw || config.include_raw_content);
    parsed.files.retain(|file| filter.allows(&file.path));

    info!("diff: {} files after filtering", parsed.files.len());
    render(&parsed, format_for(&args.io, config))
}

fn cmd_hunks(args: DiffArgs, config: &Config) -> Result<String> {
    let data = read_input(&args.io.input)?;
    let parsed = parse_file_diff(&data, args.raw || config.include_raw_content);

    render(&parsed, format_for(&args.io, config))
}

fn cmd_name_status(args: RecordArgs, config: &Config, filter: &PathFilter) -> Result<String> {
    let data = read_input(&args.io.input)?;
    let repo_path = args.repo_path.as_deref().unwrap_or(&config.repo_path);
    let records =
        parse_name_status(&data, repo_path).map(|records| filter_records(records, filter));

    render(&records, format_for(&args.io, config))
}

fn cmd_apply_summary(args: RecordArgs, config: &Config, filter: &PathFilter) -> Result<String> {
    let data = read_input(&args.io.input)?;
    let repo_path = args.repo_path.as_deref().unwrap_or(&config.repo_path);
    let records = filter_records(parse_apply_summary(&data, repo_path), filter);

    info!("apply-summary: {} files after filtering", records.len());
    render(&records, format_for(&args.io, config))
}

fn cmd_short_stat(args: InputArgs, config: &Config) -> Result<String> {
    let data = read_input(&args.input)?;
    let stat = parse_short_stat(&data);

    render(&stat, format_for(&args, config))
}

fn cmd_added_lines(args: InputArgs, config: &Config, filter: &PathFilter) -> Result<String> {
    let data = read_input(&args.input)?;
    let mut lines = parse_diff(&data, false).added_lines();
    lines.retain(|line| filter.allows(&line.file_path));

    render(&lines, format_for(&args, config))
}

fn filter_records(
    mut records: Vec<FileChangeRecord>,
    filter: &PathFilter,
) -> Vec<FileChangeRecord> {
    records.retain(|record| filter.allows(&record.path));
    records
}

fn format_for(args: &InputArgs, config: &Config) -> OutputFormat {
    args.format.unwrap_or(config.format)
}
