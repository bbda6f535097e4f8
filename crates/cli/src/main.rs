use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use soundrom_core::ExtractOptions;
use soundrom_extract::commands::{extract_command, list_command, ExtractArgs};
use soundrom_extract::FAILURE_EXIT_CODE;
use tracing_subscriber::EnvFilter;

/// MSM6295/TT6297 external ROM sound extractor.
///
/// Reads a dump of the external sound ROM, checks that it starts with an
/// address table, and writes every sound the table points at to its own
/// `sound<N>.bin` file.
#[derive(Parser, Debug)]
#[command(
    name = "soundrom-extract",
    version,
    about = "MSM6295/TT6297 external ROM sound extractor",
    long_about = None
)]
struct Cli {
    /// Sound ROM type: msm6295 (1) or tt6297 (2).
    chip: Option<String>,

    /// Path to the sound ROM binary.
    input: Option<PathBuf>,

    /// Output folder (created if missing).
    output: Option<PathBuf>,

    /// Only validate and print the address table; write nothing.
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Emit JSON instead of human-readable text.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Write the full decoded range instead of dropping each sound's last byte.
    #[arg(long, default_value_t = false)]
    keep_last_byte: bool,

    /// Also write `manifest.json` to the output folder.
    #[arg(long, default_value_t = false)]
    manifest: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            print!("{err}");
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err:#}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // No arguments at all: show usage and succeed.
    let Some(chip) = cli.chip.as_deref() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let input = cli.input.as_deref().ok_or_else(|| anyhow!("Missing input binary path"))?;

    if cli.list {
        list_command(chip, input, cli.json)?;
        return Ok(());
    }

    let output = cli.output.as_deref().ok_or_else(|| anyhow!("Missing output folder"))?;
    let args = ExtractArgs {
        chip,
        input,
        output,
        options: ExtractOptions { trim_trailing_byte: !cli.keep_last_byte },
        manifest: cli.manifest,
        json: cli.json,
    };
    extract_command(&args)?;

    Ok(())
}
