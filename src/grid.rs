//! `grid`: the square grid of classified symbol codes the search runs over.
//!
//! A [`SymbolGrid`] is immutable once built. It can come from three places:
//! - raw codes (`new` / `from_rows`), e.g. the output of a classifier,
//! - a text rendering of the puzzle (`parse_from_str`), one row of letters per line,
//! - a file holding that text (`load_from_path`, native builds only).
//!
//! Every constructor validates its input and fails fast with an [`InputError`]
//! rather than building a grid the search would misread.

use std::fmt;

use crate::errors::InputError;
use crate::symbol::{code_to_char, is_valid_code, try_char_to_code, Symbol};

/// Square, row-major grid of symbol codes. `row` is the vertical axis and
/// `col` the horizontal one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGrid {
    size: usize,
    cells: Vec<Symbol>,
}

impl SymbolGrid {
    /// Build a grid from `size * size` row-major codes.
    ///
    /// # Errors
    ///
    /// - [`InputError::EmptyGrid`] if `size` is 0.
    /// - [`InputError::NonSquareGrid`] if `cells.len() != size * size`.
    /// - [`InputError::SymbolOutOfRange`] for the first code outside `1..=26`.
    pub fn new(size: usize, cells: Vec<Symbol>) -> Result<Self, Box<InputError>> {
        if size == 0 || cells.is_empty() {
            return Err(Box::new(InputError::EmptyGrid));
        }
        if size.checked_mul(size) != Some(cells.len()) {
            // report the first row that is short (or the overflow row)
            let row = (cells.len() / size).min(size);
            let len = cells.len() - row.saturating_mul(size).min(cells.len());
            return Err(Box::new(InputError::NonSquareGrid { row, len, expected: size }));
        }
        if let Some(idx) = cells.iter().position(|&c| !is_valid_code(c)) {
            return Err(Box::new(InputError::SymbolOutOfRange {
                code: cells[idx],
                col: idx % size,
                row: idx / size,
            }));
        }

        Ok(SymbolGrid { size, cells })
    }

    /// Build a grid from explicit rows of codes.
    ///
    /// # Errors
    ///
    /// Same as [`SymbolGrid::new`]; ragged rows report the offending row.
    pub fn from_rows<R: AsRef<[Symbol]>>(rows: &[R]) -> Result<Self, Box<InputError>> {
        let size = rows.len();
        if size == 0 {
            return Err(Box::new(InputError::EmptyGrid));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != size {
                return Err(Box::new(InputError::NonSquareGrid { row, len: codes.len(), expected: size }));
            }
            cells.extend_from_slice(codes);
        }

        Self::new(size, cells)
    }

    /// Parse a grid from text: each non-blank line is one row of letters.
    ///
    /// Whitespace inside a line is ignored, so both `"CAT"` and `"C A T"` are
    /// the same row. Letters are case-insensitive.
    ///
    /// # Errors
    ///
    /// - [`InputError::InvalidWordChar`] for a character that is not a letter
    ///   (the offending line is reported as the "word").
    /// - Anything [`SymbolGrid::from_rows`] reports.
    pub fn parse_from_str(contents: &str) -> Result<Self, Box<InputError>> {
        let rows = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| {
                        try_char_to_code(c).map_err(|_| {
                            Box::new(InputError::InvalidWordChar { word: line.to_string(), invalid_char: c })
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`, or if its
    /// contents are not a valid grid (kind `InvalidInput`).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<SymbolGrid> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read grid from '{}': {}", path_ref.display(), e)
            )
        })?;

        Self::parse_from_str(&data).map_err(|ie| (*ie).into())
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Code at `(col, row)`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<Symbol> {
        if col < self.size && row < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.size && row < self.size
    }

    /// Iterate `(col, row, code)` in row-major order (row outer, column inner).
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Symbol)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, &code)| (i % size, i / size, code))
    }

    /// One row of codes.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Symbol]> {
        (row < self.size).then(|| &self.cells[row * self.size..(row + 1) * self.size])
    }
}

impl fmt::Display for SymbolGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|&c| code_to_char(c)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_grid() -> SymbolGrid {
        SymbolGrid::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_from_rows_row_major() {
        let grid = abc_grid();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(2, 0), Some(3));
        assert_eq!(grid.get(0, 2), Some(7));
        assert_eq!(grid.get(1, 2), Some(8));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
        assert_eq!(grid.row(3), None);
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = abc_grid();
        let first: Vec<_> = grid.iter_cells().take(4).collect();
        assert_eq!(first, vec![(0, 0, 1), (1, 0, 2), (2, 0, 3), (0, 1, 4)]);
    }

    #[test]
    fn test_parse_from_str() {
        let grid = SymbolGrid::parse_from_str("abc\n D E F \n\nGHI\n").unwrap();
        assert_eq!(grid, abc_grid());
    }

    #[test]
    fn test_display_round_trips_text() {
        let text = "CAT\nAXE\nTEA\n";
        let grid = SymbolGrid::parse_from_str(text).unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(*SymbolGrid::parse_from_str("\n \n").unwrap_err(), InputError::EmptyGrid);
        assert_eq!(*SymbolGrid::new(0, vec![]).unwrap_err(), InputError::EmptyGrid);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = SymbolGrid::parse_from_str("ABC\nDE\nFGH").unwrap_err();
        assert_eq!(*err, InputError::NonSquareGrid { row: 1, len: 2, expected: 3 });
    }

    #[test]
    fn test_rectangular_rejected() {
        let err = SymbolGrid::parse_from_str("ABC\nDEF").unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_new_wrong_cell_count() {
        let err = SymbolGrid::new(2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(*err, InputError::NonSquareGrid { row: 1, len: 1, expected: 2 });
    }

    #[test]
    fn test_code_out_of_range_rejected() {
        let err = SymbolGrid::new(2, vec![1, 2, 27, 4]).unwrap_err();
        assert_eq!(*err, InputError::SymbolOutOfRange { code: 27, col: 0, row: 1 });
        let err = SymbolGrid::new(1, vec![0]).unwrap_err();
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_new_huge_size_rejected() {
        let err = SymbolGrid::new(usize::MAX, vec![1]).unwrap_err();
        assert_eq!(*err, InputError::NonSquareGrid { row: 0, len: 1, expected: usize::MAX });
    }

    #[test]
    fn test_non_letter_rejected() {
        let err = SymbolGrid::parse_from_str("AB\nC3").unwrap_err();
        assert_eq!(*err, InputError::InvalidWordChar { word: "C3".to_string(), invalid_char: '3' });
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let err = SymbolGrid::load_from_path("/nonexistent/grid.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read grid"));
    }
}
