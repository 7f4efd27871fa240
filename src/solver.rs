//! The solver: scan a grid for a word list and resolve the candidates.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `InvalidInput` (Malformed grid, word or image (wraps [`InputError`]))
//! - S002: `ClassifierMismatch` (Classifier returned the wrong number of labels)
//!
//! A word that cannot be found is *not* an error: it is listed in
//! [`SolveResult::missing`] and simply has no placement.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordgrid::grid::SymbolGrid;
//! use wordgrid::solver::{self, SolverConfig};
//!
//! let grid = SymbolGrid::parse_from_str("ABC\nDEF\nGHI")?;
//! let result = solver::solve(&grid, &["adg", "xyz"], &SolverConfig::default().with_tolerance(0))?;
//!
//! assert_eq!(result.placements.len(), 1);
//! assert_eq!(result.placements[0].end(), (0, 2));
//! assert_eq!(result.missing, vec!["XYZ".to_string()]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use wordgrid::grid::SymbolGrid;
//! use wordgrid::solver::{self, SolverConfig};
//!
//! let grid = SymbolGrid::parse_from_str("AB\nCD")?;
//! match solver::solve(&grid, &["ok", "not ok"], &SolverConfig::default()) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => {
//!         // Error code: S001, caused by E005
//!         eprintln!("{}", e.display_detailed());
//!         assert_eq!(e.code(), "S001");
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashSet;
use std::time::Duration;

use instant::Instant;
use log::{debug, info};

use crate::classifier::{slice_cells, SymbolClassifier};
use crate::errors::InputError;
use crate::grid::SymbolGrid;
use crate::placement::Placement;
use crate::resolver::{resolve, AmbiguityPolicy, Resolution};
use crate::scanner::{scan_word, PlacementSet};
use crate::word_list::TargetWord;

/// Maximum defects per placement unless configured otherwise.
pub const DEFAULT_TOLERANCE: usize = 3;

/// Knobs for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of mismatched cells (after the first letter) a placement may have.
    pub tolerance: usize,
    /// How ties at a word's best defect count reach the final placements.
    pub ambiguity: AmbiguityPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig { tolerance: DEFAULT_TOLERANCE, ambiguity: AmbiguityPolicy::default() }
    }
}

impl SolverConfig {
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: usize) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_ambiguity(mut self, ambiguity: AmbiguityPolicy) -> Self {
        self.ambiguity = ambiguity;
        self
    }
}

/// Outcome of a solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Final placements after resolution and the ambiguity policy, sorted by
    /// ascending defect count.
    pub placements: Vec<Placement>,
    /// Every candidate with its verdict, for callers that want to inspect ties.
    pub resolution: Resolution,
    /// Words (uppercase, first-seen order) with no surviving placement.
    pub missing: Vec<String>,
    /// Wall-clock time spent scanning and resolving.
    pub elapsed: Duration,
}

impl SolveResult {
    /// Words whose best placement was ambiguous.
    #[must_use]
    pub fn ambiguous_words(&self) -> Vec<&str> {
        self.resolution.ambiguous_words()
    }
}

/// Unified error type for the solver pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The grid, a word, or the image/classifier input was malformed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] Box<InputError>),

    /// An injected classifier returned a different number of labels than cells.
    #[error("classifier returned {actual} labels for {expected} cells")]
    ClassifierMismatch { expected: usize, actual: usize },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "S001",
            SolverError::ClassifierMismatch { .. } => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "Malformed grid, word or image",
            SolverError::ClassifierMismatch { .. } => "Classifier returned the wrong number of labels",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "The solver refused structurally invalid input. This wraps an underlying InputError (see Input Errors section for specific error codes).",
            SolverError::ClassifierMismatch { .. } => "A SymbolClassifier must return exactly one label per cell sample, in order. A different count means the classifier implementation is broken.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::ClassifierMismatch { .. } => Some("Check the SymbolClassifier implementation: it must label every sample it is given."),
            SolverError::InvalidInput(_) => None, // InputError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidInput(ie) => {
                format!("{}\n  caused by: {}", self.code(), ie.display_detailed())
            }
            _ => crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Find every word of `words` in `grid`.
///
/// Words are uppercased and validated; repeats of an already-searched word are
/// skipped. Each call owns a fresh placement set.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] for an empty word or one with a
/// character outside `A-Z`. Nothing is searched in that case.
pub fn solve<S: AsRef<str>>(grid: &SymbolGrid, words: &[S], config: &SolverConfig) -> Result<SolveResult, SolverError> {
    let targets = words.iter().map(|w| TargetWord::new(w.as_ref())).collect::<Result<Vec<_>, _>>()?;
    Ok(solve_targets(grid, &targets, config))
}

/// Like [`solve`], for words that are already validated.
#[must_use]
pub fn solve_targets(grid: &SymbolGrid, targets: &[TargetWord], config: &SolverConfig) -> SolveResult {
    let t_solve = Instant::now();

    let mut found = PlacementSet::new();
    let mut searched: HashSet<&str> = HashSet::with_capacity(targets.len());
    for word in targets {
        if !searched.insert(word.text()) {
            debug!("{}: already searched, skipping", word.text());
            continue;
        }
        scan_word(grid, word, config.tolerance, &mut found);
    }
    let num_candidates = found.len();

    let resolution = resolve(found);
    let placements = resolution.placements(config.ambiguity);

    let placed: HashSet<&str> = placements.iter().map(|p| p.word.as_str()).collect();
    let mut reported = HashSet::new();
    let missing: Vec<String> = targets
        .iter()
        .map(TargetWord::text)
        .filter(|w| !placed.contains(w) && reported.insert(*w))
        .map(str::to_string)
        .collect();

    let elapsed = t_solve.elapsed();
    info!(
        "{}x{} grid, {} word(s), tolerance {}: {} candidate(s), {} placed, {} missing, {} ambiguous in {:.3}s",
        grid.size(),
        grid.size(),
        searched.len(),
        config.tolerance,
        num_candidates,
        placed.len(),
        missing.len(),
        resolution.ambiguous_words().len(),
        elapsed.as_secs_f64()
    );

    SolveResult { placements, resolution, missing, elapsed }
}

/// Classify a square pixel image into a grid with `classifier`, then solve.
///
/// # Errors
///
/// - [`SolverError::InvalidInput`] if the image cannot be sliced, the classifier
///   rejects the samples, or a word is invalid.
/// - [`SolverError::ClassifierMismatch`] if the classifier returns the wrong
///   number of labels.
pub fn solve_image<C, S>(
    pixels: &[Vec<f64>],
    cell_side: usize,
    classifier: &C,
    words: &[S],
    config: &SolverConfig,
) -> Result<SolveResult, SolverError>
where
    C: SymbolClassifier + ?Sized,
    S: AsRef<str>,
{
    let grid = classify_grid(pixels, cell_side, classifier)?;
    debug!("classified grid:\n{grid}");
    solve(&grid, words, config)
}

/// Slice and classify an image into a [`SymbolGrid`].
///
/// # Errors
///
/// See [`solve_image`].
pub fn classify_grid<C: SymbolClassifier + ?Sized>(
    pixels: &[Vec<f64>],
    cell_side: usize,
    classifier: &C,
) -> Result<SymbolGrid, SolverError> {
    let cells = slice_cells(pixels, cell_side)?;
    let labels = classifier.classify(&cells.samples)?;
    if labels.len() != cells.samples.len() {
        return Err(SolverError::ClassifierMismatch { expected: cells.samples.len(), actual: labels.len() });
    }
    Ok(SymbolGrid::new(cells.grid_size, labels)?)
}
