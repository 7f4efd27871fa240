//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! Loads a grid and a word list once, then solves at several tolerances,
//! repeating each run and reporting the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:      `cargo run --bin bench_local --release`
//! - Your own puzzle:      `cargo run --bin bench_local --release -- -g grid.txt -w words.txt`
//! - Multiple repeats:     `cargo run --bin bench_local --release -- -r 5`
//! - Print placements:     `cargo run --bin bench_local --release -- -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous. Use the same machine and `--release`.
//! - Loading and printing stay outside the timed section.
//! - One untimed warm-up run per case.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::grid::SymbolGrid;
use wordgrid::solver::{self, SolverConfig};
use wordgrid::word_list::WordList;

/// Simple local benchmark runner: load a puzzle once, time several tolerances.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the grid file
    #[arg(short, long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/grid.txt"))]
    grid: String,

    /// Path to the word list file
    #[arg(short, long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/words.txt"))]
    words: String,

    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many placements per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

const TOLERANCES: [usize; 4] = [0, 1, 2, 3];

fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> std::io::Result<()> {
    /// (tolerance, median seconds, placements, missing)
    type SummaryRow = (usize, f64, usize, usize);

    let cli = Cli::parse();

    eprintln!("Loading grid from {} and words from {}", cli.grid, cli.words);
    let t_load = Instant::now();
    let grid = SymbolGrid::load_from_path(&cli.grid)?;
    let word_list = WordList::load_from_path(&cli.words)?;
    eprintln!(
        "Loaded {}x{} grid and {} {} in {:.3}s",
        grid.size(),
        grid.size(),
        word_list.len(),
        pluralizer(word_list.len(), "word".into(), None),
        t_load.elapsed().as_secs_f64()
    );

    let mut summary: Vec<SummaryRow> = Vec::with_capacity(TOLERANCES.len());

    for tolerance in TOLERANCES {
        eprintln!("\n[tolerance {tolerance}]");
        let config = SolverConfig::default().with_tolerance(tolerance);

        let _warmup = solver::solve_targets(&grid, &word_list.words, &config);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;
        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let result = solver::solve_targets(black_box(&grid), &word_list.words, &config);
            let solve_secs = t_solve.elapsed().as_secs_f64();
            let _keep = black_box(result.placements.len());

            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} placed)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                result.placements.len()
            );
            times.push(solve_secs);
            last = Some(result);
        }

        let med = median(times);
        let (placed, missing) = last.as_ref().map_or((0, 0), |r| (r.placements.len(), r.missing.len()));

        if let Some(result) = &last {
            for p in result.placements.iter().take(cli.print_limit) {
                println!("{p}");
            }
        }

        eprintln!(
            "  → median {:.4}s over {} run(s); {} {} placed, {} missing",
            med,
            cli.num_repeats,
            placed,
            pluralizer(placed, "word".into(), None),
            missing
        );
        summary.push((tolerance, med, placed, missing));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:>9} | {:>10} | {:>8} | {:>8}", "tolerance", "median (s)", "placed", "missing");
    eprintln!("{:-<9}-+-{:-<10}-+-{:-<8}-+-{:-<8}", "", "", "", "");
    for (tolerance, med, placed, missing) in &summary {
        eprintln!("{tolerance:>9} | {med:>10.4} | {placed:>8} | {missing:>8}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
