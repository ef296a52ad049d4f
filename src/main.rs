//! Command-line driver: one status line per file, reasons underneath.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use tiffcheck::Verdict;

#[derive(Parser, Debug)]
#[command(
    name = "tiffcheck",
    version,
    about = "Checks TIFF files for compatibility with document-assembly importers"
)]
struct Cli {
    /// TIFF files to check, processed in the order given.
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.paths.is_empty() {
        // No work requested is not an error.
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    for path in &cli.paths {
        // The handle lives for exactly one iteration; an unopenable path
        // aborts the whole run.
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                log::debug!("opening {} failed: {err}", path.display());
                println!("Cannot open file: {}", path.display());
                return ExitCode::FAILURE;
            }
        };

        let verdict = tiffcheck::check(BufReader::new(file));
        print_verdict(path, &verdict);
    }

    ExitCode::SUCCESS
}

fn print_verdict(path: &Path, verdict: &Verdict) {
    if verdict.is_compatible() {
        println!("✔  {}", path.display());
    } else {
        println!("✘  {}", path.display());
        println!("Error:");
        for reason in verdict.reasons() {
            println!("{reason}");
        }
    }
}
