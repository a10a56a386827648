use crate::config::OutputFormat;
use crate::flow::{parse_flow, resolve_flow};
use anyhow::Context;
use conductor_common::formatter::format_command;
use conductor_common::protocol::ConductorCommand;
use conductor_yaml::resolve_value;
use serde_yaml::Value;
use std::io::{self, Write};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Clone, Copy)]
pub struct OutputHandlers {
    pub out: fn(&str),
    pub err: fn(&str),
}

pub struct FileOptions {
    pub stop_on_error: bool,
    /// Print each resolved command. Disabled for `check`.
    pub emit_commands: bool,
    pub format: OutputFormat,
    pub pretty: bool,
}

pub struct ReplOptions<'a> {
    pub banner_lines: &'a [&'a str],
    pub prompt: &'a str,
    pub exit_commands: &'a [&'a str],
    pub format: OutputFormat,
    pub pretty: bool,
}

/// Counts reported after a flow file has been processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub resolved: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Steps never reported because an earlier step failed with stop-on-error.
    pub fn skipped(&self) -> usize {
        self.total - self.resolved - self.failed
    }
}

pub fn render_command(
    cmd: &ConductorCommand,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(cmd),
        OutputFormat::Json => serde_json::to_string(cmd),
        OutputFormat::Text => Ok(format_command(cmd)),
    }
}

/// Resolve one flow-style step, e.g. `{tapOn: Login}`, and render the result.
pub fn resolve_line(line: &str, format: OutputFormat, pretty: bool) -> Result<String, String> {
    let node: Value = serde_yaml::from_str(line).map_err(|e| format!("Invalid step: {}", e))?;
    let cmd = resolve_value(node).map_err(|e| e.to_string())?;
    render_command(&cmd, format, pretty).map_err(|e| e.to_string())
}

pub async fn run_file(
    path: &Path,
    output: OutputHandlers,
    options: &FileOptions,
) -> anyhow::Result<RunSummary> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read flow file {}", path.display()))?;
    let steps = parse_flow(&content)
        .with_context(|| format!("Invalid flow file {}", path.display()))?;
    info!("Resolving {} steps from {}", steps.len(), path.display());

    let mut summary = RunSummary {
        total: steps.len(),
        ..RunSummary::default()
    };

    for outcome in resolve_flow(steps) {
        match outcome.result {
            Ok(cmd) => {
                summary.resolved += 1;
                if options.emit_commands {
                    (output.out)(&render_command(&cmd, options.format, options.pretty)?);
                }
            }
            Err(err) => {
                summary.failed += 1;
                (output.err)(&format!("Error in step {}: {}", outcome.index, err));
                if options.stop_on_error {
                    warn!("Stopping after step {}", outcome.index);
                    break;
                }
            }
        }
    }

    Ok(summary)
}

/// Possible outcomes from reading a single REPL line.
enum ReadLineResult {
    /// A non-empty input line to process.
    Input(String),
    /// Empty line or comment -- skip and re-prompt.
    Skip,
    /// EOF or exit command -- terminate the loop.
    Exit,
    /// I/O error while reading.
    Error(io::Error),
}

fn classify_line(
    result: Result<Option<String>, io::Error>,
    exit_commands: &[&str],
) -> ReadLineResult {
    match result {
        Ok(Some(input)) => {
            let trimmed = input.trim().to_string();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                ReadLineResult::Skip
            } else if exit_commands.contains(&trimmed.as_str()) {
                ReadLineResult::Exit
            } else {
                ReadLineResult::Input(trimmed)
            }
        }
        Ok(None) => ReadLineResult::Exit,
        Err(e) => ReadLineResult::Error(e),
    }
}

pub async fn run_repl(output: OutputHandlers, options: ReplOptions<'_>) -> anyhow::Result<()> {
    for line in options.banner_lines {
        (output.out)(line);
    }

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin).lines();
    let mut stdout = io::stdout();

    loop {
        print!("{}", options.prompt);
        stdout.flush()?;

        let line = tokio::select! {
            line = reader.next_line() => classify_line(line, options.exit_commands),
            _ = tokio::signal::ctrl_c() => ReadLineResult::Exit,
        };

        match line {
            ReadLineResult::Input(line) => {
                match resolve_line(&line, options.format, options.pretty) {
                    Ok(rendered) => (output.out)(&rendered),
                    Err(err) => (output.err)(&format!("Error: {}", err)),
                }
            }
            ReadLineResult::Skip => continue,
            ReadLineResult::Exit => break,
            ReadLineResult::Error(e) => return Err(e.into()),
        }
    }
    Ok(())
}
