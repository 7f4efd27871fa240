//! Grid scanner: enumerate every candidate placement of the target words.
//!
//! For one word the scanner walks the grid row-major (row outer, column
//! inner) and stops at cells holding the word's first letter. At each such cell
//! it asks the matcher for the horizontal, vertical and diagonal axis groups in
//! that order, moving on to the next group only while no exact placement has
//! turned up.
//!
//! Every non-null placement is kept, exact or not; discarding the weaker ones
//! is the resolver's job. Scanning for a word ends early after a cell whose
//! candidates were all exact. A cell that also produced an imperfect candidate
//! does not end the scan, so a cleaner instance elsewhere still gets a chance.

use log::{debug, trace};

use crate::direction::AxisGroup;
use crate::grid::SymbolGrid;
use crate::matcher::match_axis;
use crate::placement::Placement;
use crate::word_list::TargetWord;

/// The raw, unresolved collection of candidate placements.
///
/// Owned by a single solve. It may hold several placements for the same word
/// (from different cells or axes) until the resolver reduces it. Insertion
/// order is scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementSet {
    placements: Vec<Placement>,
}

impl PlacementSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Placement> {
        self.placements
    }
}

impl From<Vec<Placement>> for PlacementSet {
    fn from(placements: Vec<Placement>) -> Self {
        PlacementSet { placements }
    }
}

impl Extend<Placement> for PlacementSet {
    fn extend<I: IntoIterator<Item = Placement>>(&mut self, iter: I) {
        self.placements.extend(iter);
    }
}

impl IntoIterator for PlacementSet {
    type Item = Placement;
    type IntoIter = std::vec::IntoIter<Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlacementSet {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Try all three axis groups at one start cell, appending every candidate to
/// `found`.
///
/// Returns `true` when the cell yielded an exact placement and no imperfect
/// one, which lets the caller stop scanning for this word.
fn scan_cell(
    grid: &SymbolGrid,
    word: &TargetWord,
    col: usize,
    row: usize,
    tolerance: usize,
    found: &mut PlacementSet,
) -> bool {
    let mut clean = true;
    let mut exact = false;

    for axis in AxisGroup::ALL {
        let Some(placement) = match_axis(grid, word, col, row, axis, tolerance) else {
            continue;
        };
        exact = placement.is_exact();
        clean &= exact;
        found.push(placement);
        if exact {
            break;
        }
    }

    exact && clean
}

/// Scan the grid for one word, appending candidates to `found`.
///
/// Returns `true` if scanning stopped early on a clean exact match.
pub fn scan_word(grid: &SymbolGrid, word: &TargetWord, tolerance: usize, found: &mut PlacementSet) -> bool {
    let first = word.first_code();
    let before = found.len();

    for (col, row, code) in grid.iter_cells() {
        if code != first {
            continue;
        }
        trace!("{}: candidate start ({col},{row})", word.text());
        if scan_cell(grid, word, col, row, tolerance, found) {
            debug!("{}: exact match at ({col},{row}), {} candidate(s)", word.text(), found.len() - before);
            return true;
        }
    }

    debug!("{}: scan exhausted, {} candidate(s)", word.text(), found.len() - before);
    false
}

/// Scan the grid for every word in order, collecting a fresh placement set.
#[must_use]
pub fn scan_words(grid: &SymbolGrid, words: &[TargetWord], tolerance: usize) -> PlacementSet {
    let mut found = PlacementSet::new();
    for word in words {
        scan_word(grid, word, tolerance, &mut found);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> TargetWord {
        TargetWord::new(s).unwrap()
    }

    fn abc_grid() -> SymbolGrid {
        SymbolGrid::parse_from_str("ABC\nDEF\nGHI").unwrap()
    }

    #[test]
    fn test_exact_vertical_word() {
        let grid = abc_grid();
        let mut found = PlacementSet::new();
        assert!(scan_word(&grid, &word("ADG"), 0, &mut found));
        assert_eq!(found.len(), 1);
        let p = &found.as_slice()[0];
        assert_eq!((p.start(), p.end(), p.defect_count), ((0, 0), (0, 2), 0));
    }

    #[test]
    fn test_missing_first_letter_emits_nothing() {
        let grid = abc_grid();
        let mut found = PlacementSet::new();
        assert!(!scan_word(&grid, &word("XYZ"), 3, &mut found));
        assert!(found.is_empty());
    }

    #[test]
    fn test_imperfect_candidates_are_retained() {
        // A B C / D E F / G H I, "ABX" east from A has one defect; vertical
        // and diagonal "ABX" from A have two, beyond tolerance 1
        let grid = abc_grid();
        let mut found = PlacementSet::new();
        assert!(!scan_word(&grid, &word("ABX"), 1, &mut found));
        assert_eq!(found.len(), 1);
        assert_eq!(found.as_slice()[0].defect_count, 1);
    }

    #[test]
    fn test_later_axes_tried_after_imperfect_match() {
        // "AEI" from A: horizontal A B C has 2 defects (tolerance 2 allows it),
        // vertical A D G has 2, diagonal A E I is exact
        let grid = abc_grid();
        let mut found = PlacementSet::new();
        let stopped = scan_word(&grid, &word("AEI"), 2, &mut found);
        let defects: Vec<_> = found.iter().map(|p| p.defect_count).collect();
        assert_eq!(defects, vec![2, 2, 0]);
        // the cell produced imperfect candidates, so the scan did not stop
        assert!(!stopped);
    }

    #[test]
    fn test_exact_horizontal_skips_other_axes() {
        let grid = abc_grid();
        let mut found = PlacementSet::new();
        assert!(scan_word(&grid, &word("ABC"), 3, &mut found));
        assert_eq!(found.len(), 1);
        assert_eq!(found.as_slice()[0].end(), (2, 0));
    }

    #[test]
    fn test_clean_exact_match_stops_scan() {
        // two exact copies of "CAT"; only the first (row 0) is reported
        let grid = SymbolGrid::parse_from_str("CAT\nCAT\nZZZ").unwrap();
        let mut found = PlacementSet::new();
        assert!(scan_word(&grid, &word("CAT"), 0, &mut found));
        assert_eq!(found.len(), 1);
        assert_eq!(found.as_slice()[0].start(), (0, 0));
    }

    #[test]
    fn test_scan_continues_past_imperfect_cell() {
        // row 0 "CAX" is an imperfect east match, row 1 "CAT" is exact
        let grid = SymbolGrid::parse_from_str("CAX\nCAT\nZZZ").unwrap();
        let mut found = PlacementSet::new();
        assert!(scan_word(&grid, &word("CAT"), 1, &mut found));
        let summary: Vec<_> = found.iter().map(|p| (p.start(), p.defect_count)).collect();
        // (0,0): east "CAX" 1 defect, south "CCZ" 2 defects (over), diagonal
        // "CAZ" 1 defect; then (0,1): east exact
        assert_eq!(summary, vec![((0, 0), 1), ((0, 0), 1), ((0, 1), 0)]);
    }

    #[test]
    fn test_scan_words_accumulates_in_order() {
        let grid = abc_grid();
        let found = scan_words(&grid, &[word("ADG"), word("XYZ"), word("IHG")], 0);
        let words: Vec<_> = found.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(words, vec!["ADG", "IHG"]);
    }

    #[test]
    fn test_scan_words_empty_list() {
        assert!(scan_words(&abc_grid(), &[], 2).is_empty());
    }

    #[test]
    fn test_paths_stay_in_bounds() {
        let grid = SymbolGrid::parse_from_str("ABCD\nBCDA\nCDAB\nDABC").unwrap();
        let words: Vec<_> = ["ABCD", "DCBA", "ACAC", "BBBB", "AB", "DAD"].iter().map(|w| word(w)).collect();
        for tolerance in 0..=3 {
            let found = scan_words(&grid, &words, tolerance);
            for p in &found {
                assert!(p.defect_count <= tolerance);
                for (c, r) in p.cells() {
                    assert!(grid.contains(c, r), "{p} leaves the grid");
                }
            }
        }
    }
}
