mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use import_logging::{import_error, import_info};
use sitelist_engine::{run_import, LogSink};

use crate::logging::LogDestination;

/// Import a plain-text site list into a sites export document.
#[derive(Debug, Parser)]
#[command(name = "sitelist_import", version, about)]
struct Cli {
    /// Path to the line-delimited site list.
    list: PathBuf,
    /// Path to the JSON export document to update.
    document: PathBuf,
    /// Also write logs to ./import.log.
    #[arg(long)]
    log_file: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let destination = if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    logging::initialize(destination);

    let mut sink = LogSink;
    match run_import(&cli.list, &cli.document, &mut sink) {
        Ok(summary) => {
            import_info!(
                "import finished: {} sites written ({} duplicate names, {} duplicate urls, {} unparseable lines)",
                summary.site_count,
                summary.stats.duplicate_names,
                summary.stats.duplicate_urls,
                summary.stats.unparseable
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            import_error!("import failed: {err}");
            ExitCode::FAILURE
        }
    }
}
