//! Sorting Visualizer
//!
//! Terminal front end for the step-sort engine.
//!
//! ```text
//! step-sort visualize <algorithm> [size] [delay]
//! step-sort benchmark [size] [--csv <path>] [--seed <n>] [--threshold <n>]
//! ```
//!
//! `visualize` animates one sort on a random array, redrawing a row of bars
//! after every step. `benchmark` times all algorithms and prints them ranked.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use step_sort::config::{
    self, BENCHMARK_DEFAULT_SIZE, DEFAULT_DELAY_SECS, VISUAL_DEFAULT_SIZE,
};
use step_sort::{logging, Algorithm, BenchmarkConfig, BenchmarkRunner, Error, Result, SortSession};

/// Glyphs for bar heights, lowest to highest
const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn main() {
    logging::init();

    let args: Vec<String> = env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        Some("visualize") => visualize(&args[2..]),
        Some("benchmark") => benchmark(&args[2..]),
        _ => {
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} visualize <algorithm> [size] [delay]", program);
    eprintln!("  {} benchmark [size] [--csv <path>] [--seed <n>] [--threshold <n>]", program);
    eprintln!();
    eprintln!("Algorithms:");
    for algorithm in Algorithm::all() {
        eprintln!("  {:<16} {}", algorithm.name(), algorithm.complexity());
    }
}

fn parse_arg<T: FromStr>(value: Option<&String>, what: &str, default: T) -> Result<T> {
    match value {
        Some(v) => v
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("{} '{}'", what, v))),
        None => Ok(default),
    }
}

/// Render one array state as a row of bars scaled to `max`.
fn render_bars(data: &[u32], max: u32) -> String {
    let max = max.max(1) as usize;
    data.iter()
        .map(|&v| BARS[(v as usize * (BARS.len() - 1)) / max])
        .collect()
}

fn visualize(args: &[String]) -> Result<()> {
    let algorithm: Algorithm = args
        .first()
        .ok_or_else(|| Error::InvalidArgument("missing algorithm".to_string()))?
        .parse()?;
    let size = config::validate_visual_size(parse_arg(args.get(1), "size", VISUAL_DEFAULT_SIZE)?)?;
    let delay = config::validate_delay(parse_arg(args.get(2), "delay", DEFAULT_DELAY_SECS)?)?;

    let mut runner = BenchmarkRunner::new(BenchmarkConfig::default())?;
    let data = runner.random_array(size);
    let max = data.iter().copied().max().unwrap_or(1);

    println!("{} ({}), {} elements", algorithm, algorithm.complexity(), size);
    let mut stdout = io::stdout();
    print!("{}", render_bars(&data, max));
    stdout.flush()?;

    let pause = Duration::from_secs_f64(delay);
    let mut session = SortSession::new(algorithm, data);
    while let Some(step) = session.next_step() {
        print!("\r{}", render_bars(step, max));
        stdout.flush()?;
        thread::sleep(pause);
    }

    println!();
    println!("Sorting complete! {} steps", session.steps_taken());
    Ok(())
}

fn benchmark(args: &[String]) -> Result<()> {
    let mut size = BENCHMARK_DEFAULT_SIZE;
    let mut csv_path: Option<PathBuf> = None;
    let mut settings = BenchmarkConfig::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--csv" => {
                csv_path = Some(PathBuf::from(
                    iter.next().map(String::as_str).unwrap_or(config::DEFAULT_CSV_FILE),
                ));
            }
            "--seed" => settings = settings.with_seed(parse_arg(iter.next(), "seed", 0)?),
            "--threshold" => {
                let threshold = parse_arg(iter.next(), "threshold", settings.threshold)?;
                settings = settings.with_threshold(threshold);
            }
            _ => size = parse_arg(Some(arg), "size", size)?,
        }
    }
    let size = config::validate_benchmark_size(size)?;

    println!("Sorting Algorithm Time Comparison");
    println!("=================================\n");

    let mut runner = BenchmarkRunner::new(settings)?;
    let report = runner.report(Algorithm::all(), size);

    println!("Array size: {} elements\n", size);
    println!("{:>4} | {:<16} | {:>12} | {:>12}", "Rank", "Algorithm", "Time (s)", "Steps");
    println!("{:-<4}-+-{:-<16}-+-{:-<12}-+-{:-<12}", "", "", "", "");
    for (rank, result) in report.results.iter().enumerate() {
        println!(
            "{:>4} | {:<16} | {:>12.6} | {:>12}",
            rank + 1,
            result.name(),
            result.seconds(),
            result.steps
        );
    }

    if size > report.threshold {
        println!(
            "\nNote: Bubble Sort and Insertion Sort are skipped above {} elements",
            report.threshold
        );
    }
    println!("Note: each algorithm sorts its own random array");

    if let Some(path) = csv_path {
        report.save_csv(&path)?;
        println!("\nCSV report written to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bars_scale() {
        assert_eq!(render_bars(&[0, 50, 100], 100), "▁▄█");
        assert_eq!(render_bars(&[], 100), "");
    }

    #[test]
    fn test_render_bars_zero_max() {
        assert_eq!(render_bars(&[0, 0], 0), "▁▁");
    }

    #[test]
    fn test_parse_arg() {
        let value = "42".to_string();
        assert_eq!(parse_arg(Some(&value), "size", 7usize).unwrap(), 42);
        assert_eq!(parse_arg(None, "size", 7usize).unwrap(), 7);

        let bad = "lots".to_string();
        assert!(matches!(
            parse_arg(Some(&bad), "size", 7usize),
            Err(Error::InvalidArgument(_))
        ));
    }
}
