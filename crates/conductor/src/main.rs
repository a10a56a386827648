use anyhow::bail;
use clap::{Parser, Subcommand};
use conductor::cli::{self, FileOptions, OutputHandlers, ReplOptions};
use conductor::config::{ConductorConfig, ConfigLoader, OutputFormat};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conductor", version, about = "Resolve flow steps into device commands")]
struct Args {
    #[command(subcommand)]
    mode: Mode,

    /// Config file (defaults to ./conductor.yaml, then ~/.conductor/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Resolve every step of a flow file and print the commands
    Resolve {
        file: PathBuf,
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
        /// Keep resolving after a failing step
        #[arg(long)]
        continue_on_error: bool,
    },
    /// Validate a flow file without printing commands
    Check { file: PathBuf },
    /// Resolve flow-style steps typed on stdin, one per line
    Repl {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries resolved commands.
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_from(path).await?,
        None => ConfigLoader::load_default().await?,
    };
    debug!("Using config: {:?}", config);

    let output = OutputHandlers {
        out: |msg| println!("{}", msg),
        err: |msg| error!("{}", msg),
    };

    match args.mode {
        Mode::Resolve {
            file,
            format,
            pretty,
            continue_on_error,
        } => {
            let options = FileOptions {
                stop_on_error: config.run.stop_on_error && !continue_on_error,
                emit_commands: true,
                format: format.unwrap_or(config.output.format),
                pretty: pretty || config.output.pretty,
            };
            let summary = cli::run_file(&file, output, &options).await?;
            if summary.failed > 0 {
                bail!(
                    "{} of {} steps failed ({} skipped)",
                    summary.failed,
                    summary.total,
                    summary.skipped()
                );
            }
        }
        Mode::Check { file } => {
            let options = FileOptions {
                stop_on_error: false,
                emit_commands: false,
                format: config.output.format,
                pretty: false,
            };
            let summary = cli::run_file(&file, output, &options).await?;
            if summary.failed > 0 {
                bail!("{} of {} steps failed", summary.failed, summary.total);
            }
            println!("{} steps OK", summary.resolved);
        }
        Mode::Repl { format } => {
            run_repl(&config, format).await?;
        }
    }

    Ok(())
}

async fn run_repl(config: &ConductorConfig, format: Option<OutputFormat>) -> anyhow::Result<()> {
    let output = OutputHandlers {
        out: |msg| println!("{}", msg),
        err: |msg| println!("{}", msg),
    };
    let options = ReplOptions {
        banner_lines: &[
            "Enter one step per line in flow style, e.g. {tapOn: Login} or {action: back}.",
            "Type 'exit' or 'quit' to close.",
        ],
        prompt: "> ",
        exit_commands: &["exit", "quit"],
        format: format.unwrap_or(config.output.format),
        pretty: config.output.pretty,
    };
    cli::run_repl(output, options).await
}
