use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use wordgrid::errors::InputError;
use wordgrid::grid::SymbolGrid;
use wordgrid::resolver::AmbiguityPolicy;
use wordgrid::solver::{self, SolverConfig, DEFAULT_TOLERANCE};
use wordgrid::word_list::WordList;

/// Fuzzy word-search solver
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Grid file: one row of letters per line, as many rows as columns
    grid: PathBuf,

    /// Word list file: one word per line, `#` starts a comment line
    words: PathBuf,

    /// Maximum number of mismatched letters per placement
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: usize,

    /// What to do when a word's best placements tie
    #[arg(short, long, value_enum, default_value_t = Ambiguous::Earliest)]
    ambiguous: Ambiguous,

    /// Also print pixel endpoints, for a grid image with this cell side
    #[arg(short, long, value_name = "CELL_SIDE")]
    pixels: Option<usize>,

    /// Echo the parsed grid on stderr before solving
    #[arg(long)]
    show_grid: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Ambiguous {
    /// Keep the tied placement found first
    Earliest,
    /// Print every tied placement
    Keep,
    /// Treat the word as not found
    Drop,
}

impl From<Ambiguous> for AmbiguityPolicy {
    fn from(a: Ambiguous) -> Self {
        match a {
            Ambiguous::Earliest => AmbiguityPolicy::EarliestScanOrder,
            Ambiguous::Keep => AmbiguityPolicy::KeepAll,
            Ambiguous::Drop => AmbiguityPolicy::DropAmbiguous,
        }
    }
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`] and turns any error into a readable message and
/// a nonzero exit code.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", detailed_message(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// Prefer the coded, detailed form for our own error types.
fn detailed_message(e: &(dyn std::error::Error + 'static)) -> String {
    if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
        return solver_err.display_detailed();
    }
    if let Some(input_err) = e
        .downcast_ref::<std::io::Error>()
        .and_then(|io| io.get_ref())
        .and_then(|inner| inner.downcast_ref::<InputError>())
    {
        return input_err.display_detailed();
    }
    e.to_string()
}

/// Core application logic:
/// 1. Load the grid and the word list.
/// 2. Solve.
/// 3. Print placements on stdout; missing and ambiguous words, and timings,
///    on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let grid = SymbolGrid::load_from_path(&cli.grid)?;
    let word_list = WordList::load_from_path(&cli.words)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    if cli.show_grid {
        eprint!("{grid}");
    }

    let config = SolverConfig::default()
        .with_tolerance(cli.tolerance)
        .with_ambiguity(cli.ambiguous.into());
    let result = solver::solve_targets(&grid, &word_list.words, &config);

    for placement in &result.placements {
        match cli.pixels {
            Some(cell_side) => {
                let ((x0, y0), (x1, y1)) = placement.pixel_endpoints(cell_side);
                println!("{placement} px ({x0:.1},{y0:.1})->({x1:.1},{y1:.1})");
            }
            None => println!("{placement}"),
        }
    }

    for word in result.ambiguous_words() {
        let tied = result.resolution.ambiguous().filter(|p| p.word == word).count();
        eprintln!("ambiguous: {word} ({tied} placements tied)");
    }
    for word in &result.missing {
        eprintln!("not found: {word}");
    }

    eprintln!(
        "Loaded {}x{} grid and {} words in {:.3}s; solved in {:.3}s ({} placed, {} missing).",
        grid.size(),
        grid.size(),
        word_list.len(),
        load_secs,
        result.elapsed.as_secs_f64(),
        result.placements.len(),
        result.missing.len()
    );

    Ok(())
}
