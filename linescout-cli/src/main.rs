use clap::Parser;
use colored::Colorize;
use linescout::{scan, LoadStats, ScanConfig, ScanError};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, ScanError>;

/// Walks a directory tree, loads every text file and indexes its lines,
/// reporting what a scanning engine would receive.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Show only summary statistics, not per-file line counts
    #[arg(short, long)]
    stats: bool,

    /// Number of worker threads (default: CPU cores)
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let cli_config = ScanConfig {
        root_path: cli.root,
        stats_only: cli.stats,
        thread_count: cli
            .threads
            .unwrap_or_else(|| NonZeroUsize::new(num_cpus::get()).unwrap()),
        log_level: cli.log_level.unwrap_or_else(|| "warn".to_string()),
    };

    // Config file values fill in whatever the CLI left at its defaults
    let config = match &cli.config {
        Some(path) => ScanConfig::load_from(Some(path))
            .map_err(|e| ScanError::config_error(e.to_string()))?
            .merge_with_cli(cli_config),
        None => cli_config,
    };

    init_tracing(&config.log_level)?;
    debug!("Effective config: {:?}", config);

    let start = Instant::now();
    let listing: Mutex<Vec<(PathBuf, usize)>> = Mutex::new(Vec::new());

    let stats = scan(&config, |path, view| {
        if !config.stats_only {
            listing
                .lock()
                .unwrap()
                .push((path.to_path_buf(), view.line_count()));
        }
    })?;

    let elapsed = start.elapsed();

    if !config.stats_only {
        let mut listing = listing.into_inner().unwrap();
        listing.sort();
        for (path, line_count) in listing {
            println!(
                "{}: {} lines",
                path.display().to_string().blue(),
                line_count
            );
        }
    }

    print_summary(&stats, elapsed);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .map_err(|e| ScanError::config_error(format!("Invalid log level '{}': {}", log_level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn print_summary(stats: &LoadStats, elapsed: Duration) {
    // Millisecond resolution is plenty for a summary line
    let elapsed = Duration::from_millis(elapsed.as_millis() as u64);

    let summary = format!(
        "{} files, {} kB and {} lines in {}",
        stats.loaded_files,
        stats.loaded_bytes / 1024,
        stats.indexed_lines,
        humantime::format_duration(elapsed)
    );
    println!("\n{}", summary.green());

    if stats.skipped_files() > 0 {
        let skipped = format!(
            "skipped: {} binary, {} empty, {} unreadable, {} short reads",
            stats.binary_files, stats.empty_files, stats.open_failures, stats.short_reads
        );
        println!("{}", skipped.yellow());
    }
}
