//! Directional matcher: does a word plausibly start at one cell along one axis?
//!
//! The matcher assumes the start cell already holds the word's first letter
//! (the scanner only calls it for such cells), so comparison begins at the
//! second letter. Every later cell that disagrees with the word is a *defect*.
//! An attempt fails as soon as it would step off the grid or its defects exceed
//! the tolerance; neither case is an error, just "no match".
//!
//! Within an axis group the directions are tried in the fixed order of
//! [`AxisGroup::directions`] and the **first** one that stays within tolerance
//! wins, even if a later direction would have fewer defects.

use log::trace;

use crate::direction::{AxisGroup, Direction};
use crate::grid::SymbolGrid;
use crate::placement::Placement;
use crate::word_list::TargetWord;

/// Count the defects of `word` laid from `(col, row)` along `direction`.
///
/// Returns `None` if the path leaves the grid (off-grid cells are fatal, never
/// counted as defects) or if the defect count exceeds `tolerance`, in which
/// case scanning stops at that letter.
#[must_use]
pub fn match_direction(
    grid: &SymbolGrid,
    word: &TargetWord,
    col: usize,
    row: usize,
    direction: Direction,
    tolerance: usize,
) -> Option<usize> {
    debug_assert!(!word.is_empty(), "matcher needs a non-empty word");

    let mut defects = 0;
    for (i, &expected) in word.codes().iter().enumerate().skip(1) {
        let (c, r) = direction.step(col, row, i, grid.size())?;
        // safe: step() only returns in-bounds cells
        let actual = grid.get(c, r)?;
        if actual != expected {
            defects += 1;
            if defects > tolerance {
                return None;
            }
        }
    }

    Some(defects)
}

/// Try each direction of `axis` in order and return the first placement that
/// stays within `tolerance`.
#[must_use]
pub fn match_axis(
    grid: &SymbolGrid,
    word: &TargetWord,
    col: usize,
    row: usize,
    axis: AxisGroup,
    tolerance: usize,
) -> Option<Placement> {
    axis.directions().iter().find_map(|&direction| {
        let defects = match_direction(grid, word, col, row, direction, tolerance)?;
        trace!("{} at ({col},{row}) {direction}: {defects} defect(s)", word.text());
        Some(Placement::along(word.text(), col, row, direction, defects))
    })
}
