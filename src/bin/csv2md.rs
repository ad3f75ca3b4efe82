//! CSV to Markdown Converter
//!
//! Converts a benchmark CSV export (`Algorithm,Time (s)`) to a Markdown table.
//!
//! Usage:
//!   csv2md input.csv [output.md]
//!
//! If output is not specified, prints to stdout.

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use step_sort::logging;
use step_sort::report::{parse_csv, timings_to_markdown};
use tracing::debug;

fn main() {
    logging::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.csv> [output.md]", args[0]);
        eprintln!();
        eprintln!("Converts a sorting benchmark CSV export to Markdown format.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  input.csv     Path to the CSV report file");
        eprintln!("  output.md     Optional output path (prints to stdout if not specified)");
        process::exit(1);
    }

    let input_path = Path::new(&args[1]);

    let content = match fs::read_to_string(input_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading input file: {}", e);
            process::exit(1);
        }
    };

    let rows = match parse_csv(&content) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Make sure the file is a CSV export from `step-sort benchmark --csv`");
            process::exit(1);
        }
    };
    debug!(rows = rows.len(), path = %input_path.display(), "parsed CSV report");

    let markdown = timings_to_markdown(&rows);

    if args.len() >= 3 {
        let output_path = Path::new(&args[2]);
        match fs::write(output_path, &markdown) {
            Ok(()) => {
                println!("Markdown report written to: {}", output_path.display());
            }
            Err(e) => {
                eprintln!("Error writing output file: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", markdown);
    }
}
