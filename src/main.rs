use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use bella::{compile, format_error, Output, Stage};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "bella", version, about = "Analyze and optimize a Bella program")]
struct Cli {
    /// Path to the Bella source file
    file: PathBuf,

    /// Last pipeline stage to run; its tree is printed
    #[arg(long, value_enum, default_value_t = Stage::Optimized)]
    stage: Stage,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "bella=debug" } else { "bella=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let start = Instant::now();
    let source = read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    debug!(file = %cli.file.display(), bytes = source.len(), "read source");

    match compile(&source, &file_name, cli.stage) {
        Ok(output) => {
            match output {
                Output::Parsed(tree) => println!("{:#?}", tree),
                Output::Analyzed(program) | Output::Optimized(program) => println!("{:#?}", program),
            }
            info!(stage = ?cli.stage, elapsed = ?start.elapsed(), "done");
            Ok(ExitCode::SUCCESS)
        },
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &cli.file.display().to_string()));
            Ok(ExitCode::FAILURE)
        },
    }
}
