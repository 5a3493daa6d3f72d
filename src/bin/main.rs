//! Imagery Atlas Merge CLI
//!
//! Merges the original and expanded imagery atlas documents and prints a
//! summary. With no arguments the default file names in the current
//! directory are used.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use imagery_atlas_merge::{
    render_report, run, AtlasPaths, FilesystemLoader, MergeError, MergeOptions,
    EXPANDED_DOCUMENT, MERGED_DOCUMENT, ORIGINAL_DOCUMENT,
};

#[derive(Parser)]
#[command(name = "imagery-atlas-merge")]
#[command(about = "Merge imagery atlas dataset and platform catalogs into a single document")]
#[command(version)]
struct Cli {
    /// Original atlas document (its platforms take precedence)
    #[arg(long, default_value = ORIGINAL_DOCUMENT)]
    original: PathBuf,

    /// Expanded atlas document
    #[arg(long, default_value = EXPANDED_DOCUMENT)]
    expanded: PathBuf,

    /// Output file, overwritten if it exists
    #[arg(short, long, default_value = MERGED_DOCUMENT)]
    output: PathBuf,

    /// Base directory for relative paths
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Don't append the built-in supplemental platforms
    #[arg(long)]
    no_supplemental: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Log to stderr so stdout carries only the report
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_merge(cli: Cli) -> Result<(), MergeError> {
    let loader = FilesystemLoader::new(cli.dir);
    let paths = AtlasPaths {
        original: cli.original,
        expanded: cli.expanded,
        output: loader.resolve(&cli.output),
    };
    let options = MergeOptions {
        add_supplemental_platforms: !cli.no_supplemental,
    };

    let result = run(&loader, &paths, &options)?;
    debug!(
        "Platforms: {} original, {} added from expanded ({} duplicates), {} supplemental ({} already present)",
        result.stats.original_platforms,
        result.stats.expanded_platforms_added,
        result.stats.expanded_platforms_skipped,
        result.stats.supplemental_added,
        result.stats.supplemental_skipped
    );

    print!("{}", render_report(&result.document));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_merge(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
