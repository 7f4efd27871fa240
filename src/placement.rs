use std::fmt;

use serde::Serialize;

use crate::direction::Direction;

/// Where one target word was found: grid-space endpoints plus the number of
/// cells along the path (after the first) that disagreed with the word.
///
/// A placement is immutable once the matcher emits it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub start_col: usize,
    pub start_row: usize,
    pub end_col: usize,
    pub end_row: usize,
    pub word: String,
    pub defect_count: usize,
}

impl Placement {
    /// Build the placement of `word` running from `(col, row)` along `direction`.
    #[must_use]
    pub(crate) fn along(word: &str, col: usize, row: usize, direction: Direction, defect_count: usize) -> Self {
        let last = word.len().saturating_sub(1);
        // the matcher only emits in-bounds paths, so the end never underflows
        let end_col = step_coord(col, direction.dx, last);
        let end_row = step_coord(row, direction.dy, last);
        Placement {
            start_col: col,
            start_row: row,
            end_col,
            end_row,
            word: word.to_string(),
            defect_count,
        }
    }

    #[must_use]
    pub fn start(&self) -> (usize, usize) {
        (self.start_col, self.start_row)
    }

    #[must_use]
    pub fn end(&self) -> (usize, usize) {
        (self.end_col, self.end_row)
    }

    /// True when every letter matched (`defect_count == 0`).
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.defect_count == 0
    }

    /// Number of cells on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Unit step from start to end; `None` for one-letter words.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.start(), self.end())
    }

    /// Grid coordinates `(col, row)` of every cell on the path, start first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let direction = self.direction().unwrap_or(Direction::EAST);
        (0..self.len()).map(move |i| {
            (step_coord(self.start_col, direction.dx, i), step_coord(self.start_row, direction.dy, i))
        })
    }

    /// Pixel-space endpoints for a renderer, with grid coordinate `i` mapped to
    /// the centre of its cell, `i * cell_side + cell_side / 2`.
    #[must_use]
    pub fn pixel_endpoints(&self, cell_side: usize) -> ((f64, f64), (f64, f64)) {
        let to_pixels = |i: usize| (i * cell_side) as f64 + cell_side as f64 / 2.0;
        (
            (to_pixels(self.start_col), to_pixels(self.start_row)),
            (to_pixels(self.end_col), to_pixels(self.end_row)),
        )
    }
}

fn step_coord(base: usize, delta: i8, steps: usize) -> usize {
    match delta {
        0 => base,
        d if d > 0 => base + steps,
        _ => base.saturating_sub(steps),
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({},{})->({},{}) [defects={}]",
            self.word, self.start_col, self.start_row, self.end_col, self.end_row, self.defect_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_along_computes_end() {
        let p = Placement::along("ADG", 0, 0, Direction::SOUTH, 0);
        assert_eq!(p.start(), (0, 0));
        assert_eq!(p.end(), (0, 2));
        assert!(p.is_exact());

        let p = Placement::along("IEA", 2, 2, Direction::NORTH_WEST, 1);
        assert_eq!(p.end(), (0, 0));
        assert!(!p.is_exact());
    }

    #[test]
    fn test_single_letter_placement() {
        let p = Placement::along("E", 1, 1, Direction::EAST, 0);
        assert_eq!(p.start(), p.end());
        assert_eq!(p.direction(), None);
        assert_eq!(p.cells().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn test_cells_follow_direction() {
        let p = Placement::along("CEG", 2, 0, Direction::SOUTH_WEST, 0);
        assert_eq!(p.direction(), Some(Direction::SOUTH_WEST));
        assert_eq!(p.cells().collect::<Vec<_>>(), vec![(2, 0), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_pixel_endpoints() {
        let p = Placement::along("ABC", 0, 0, Direction::EAST, 0);
        assert_eq!(p.pixel_endpoints(30), ((15.0, 15.0), (75.0, 15.0)));
    }

    #[test]
    fn test_display() {
        let p = Placement::along("ADG", 0, 0, Direction::SOUTH, 1);
        assert_eq!(p.to_string(), "ADG (0,0)->(0,2) [defects=1]");
    }
}
