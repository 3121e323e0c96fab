use crate::config::load_report_config;
use crate::error::Result;
use crate::storage::StorageClient;
use crate::storage::constants::PROGRESS_UPDATE_INTERVAL;
use crate::storage::utils::OutputFormat;
use crate::storage::utils::progress::{ConsoleProgressReporter, NullProgress, ProgressReporter};
use crate::units::parse::parse_units_arg;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "readbench",
    version,
    about = "Benchmark reading files, and generate files to benchmark"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Time reading every file in a directory and report the throughput
    Bench(BenchArgs),
    /// Generate zero-filled files as test data
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct BenchArgs {
    /// Directory whose files are read (not recursive)
    pub directory: PathBuf,

    /// Read only the first N files in path order, 0 reads all
    #[arg(short, long, default_value_t = 0)]
    pub files: usize,

    /// Number of times the files are read
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Print the report as a single JSON line
    #[arg(long)]
    pub json: bool,
}

impl BenchArgs {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory to write files into, created if missing
    pub output_dir: PathBuf,

    /// Number of files, with optional K/M/G/T/P suffix
    #[arg(short, long, default_value = "1", value_parser = parse_units_arg)]
    pub files: u64,

    /// Size of each file in bytes, with optional K/M/G/T/P suffix
    #[arg(short, long, default_value = "10K", value_parser = parse_units_arg)]
    pub size: u64,

    /// Show a progress indicator
    #[arg(long)]
    pub progress: bool,
}

/// Dispatch a parsed command line.
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Bench(bench) => run_bench(bench).await,
        Command::Generate(generate) => run_generate(generate).await,
    }
}

async fn run_bench(args: BenchArgs) -> Result<()> {
    let config = load_report_config()?;
    let client = StorageClient::open_existing(&args.directory)?;
    let report = client
        .benchmark(args.files, args.number, config.formatter())
        .await?;

    match args.output_format() {
        OutputFormat::Human => println!("{}", report.message),
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
    }
    Ok(())
}

async fn run_generate(args: GenerateArgs) -> Result<()> {
    let client = StorageClient::create(&args.output_dir).await?;

    let progress: Box<dyn ProgressReporter> = if args.progress {
        Box::new(ConsoleProgressReporter::new(
            format!("Generating {}", args.output_dir.display()),
            Some(args.files),
            PROGRESS_UPDATE_INTERVAL,
        ))
    } else {
        Box::new(NullProgress)
    };

    client
        .generate(args.files, args.size, progress.as_ref())
        .await?;
    Ok(())
}
