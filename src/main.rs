use clap::error::ErrorKind;
use clap::Parser;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sheet_diff::report::{write_text_report, Labels};
use sheet_diff::{DiffConfig, DiffError, ReportMode, Verdict, WorkbookDiffer};

const USAGE: &str = "Usage: sheet-diff [OPTIONS] <FILE1> <FILE2>";

#[derive(Parser, Debug)]
#[command(name = "sheet-diff")]
#[command(about = "Compare two spreadsheet workbooks sheet by sheet and cell by cell", long_about = None)]
#[command(version)]
struct Cli {
    /// First workbook
    file1: PathBuf,

    /// Second workbook
    file2: PathBuf,

    /// Report every differing sheet instead of stopping at the first one
    #[arg(long)]
    all: bool,

    /// Cell text replaced before comparing (default: #DIV/0!)
    #[arg(long)]
    marker: Option<String>,

    /// Replacement for the marker (default: err)
    #[arg(long)]
    sentinel: Option<String>,
}

impl Cli {
    fn apply_to(&self, mut config: DiffConfig) -> DiffConfig {
        if self.all {
            config.mode = ReportMode::Exhaustive;
        }
        if let Some(marker) = &self.marker {
            config.marker = marker.clone();
        }
        if let Some(sentinel) = &self.sentinel {
            config.sentinel = sentinel.clone();
        }
        config
    }
}

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout only carries the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true),
        )
        .init();

    // Load .env file if it exists (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!("Argument parsing failed: {}", e);
            print_line(&mut io::stdout(), DiffError::Usage(USAGE.to_string()));
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(e) => {
            print_line(&mut io::stdout(), format_args!("Error: {e}"));
            ExitCode::from(1)
        }
    }
}

/// Write one line, ignoring a closed or failing stdout.
fn print_line<W: Write>(out: &mut W, line: impl Display) {
    let _ = writeln!(out, "{line}");
}

#[instrument(skip_all, fields(file1 = %cli.file1.display(), file2 = %cli.file2.display()))]
fn run(cli: &Cli) -> Result<Verdict, DiffError> {
    let config = cli.apply_to(DiffConfig::from_env()?);
    config.validate()?;
    debug!("Using config: {:?}", config);

    let differ = WorkbookDiffer::new(config);
    let report = differ.compare_files(&cli.file1, &cli.file2)?;

    let left = cli.file1.display().to_string();
    let right = cli.file2.display().to_string();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // A closed stdout (e.g. piped into `head`) must not change the verdict
    let _ = write_text_report(
        &mut out,
        &report,
        Labels {
            left: &left,
            right: &right,
        },
    );
    let _ = out.flush();

    Ok(report.verdict())
}
