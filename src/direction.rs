//! The eight compass directions and the three axis groups the matcher tries.
//!
//! Columns grow to the east (`dx = +1`) and rows grow to the south
//! (`dy = +1`). The order of [`AxisGroup::directions`] is part of the search
//! contract: the matcher returns the first direction that stays within
//! tolerance, not the one with the fewest defects.

use std::fmt;

use serde::Serialize;

/// A unit step on the grid, `(dx, dy) ∈ {-1, 0, 1}² \ {(0, 0)}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub const EAST: Direction = Direction { dx: 1, dy: 0 };
    pub const WEST: Direction = Direction { dx: -1, dy: 0 };
    pub const SOUTH: Direction = Direction { dx: 0, dy: 1 };
    pub const NORTH: Direction = Direction { dx: 0, dy: -1 };
    pub const SOUTH_EAST: Direction = Direction { dx: 1, dy: 1 };
    pub const SOUTH_WEST: Direction = Direction { dx: -1, dy: 1 };
    pub const NORTH_EAST: Direction = Direction { dx: 1, dy: -1 };
    pub const NORTH_WEST: Direction = Direction { dx: -1, dy: -1 };

    /// All eight directions, grouped by axis in trial order.
    pub const ALL: [Direction; 8] = [
        Direction::EAST,
        Direction::WEST,
        Direction::SOUTH,
        Direction::NORTH,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
    ];

    /// Step `steps` times from `(col, row)`, returning `None` if the result
    /// leaves `[0, size)` on either axis.
    #[must_use]
    pub fn step(self, col: usize, row: usize, steps: usize, size: usize) -> Option<(usize, usize)> {
        let col = offset(col, self.dx, steps)?;
        let row = offset(row, self.dy, steps)?;
        (col < size && row < size).then_some((col, row))
    }

    /// Which axis group this direction belongs to.
    #[must_use]
    pub fn axis(self) -> AxisGroup {
        match (self.dx, self.dy) {
            (_, 0) => AxisGroup::Horizontal,
            (0, _) => AxisGroup::Vertical,
            _ => AxisGroup::Diagonal,
        }
    }

    /// The unit direction from one cell toward another, if they lie on a
    /// common straight line. `None` for identical cells.
    #[must_use]
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let dx = signed_delta(from.0, to.0);
        let dy = signed_delta(from.1, to.1);
        if dx == 0 && dy == 0 {
            return None;
        }
        if dx != 0 && dy != 0 && dx.unsigned_abs() != dy.unsigned_abs() {
            return None;
        }
        Some(Direction { dx: dx.signum() as i8, dy: dy.signum() as i8 })
    }

    fn name(self) -> &'static str {
        match (self.dx, self.dy) {
            (1, 0) => "E",
            (-1, 0) => "W",
            (0, 1) => "S",
            (0, -1) => "N",
            (1, 1) => "SE",
            (-1, 1) => "SW",
            (1, -1) => "NE",
            (-1, -1) => "NW",
            _ => "?",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn offset(base: usize, delta: i8, steps: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        d if d > 0 => base.checked_add(steps),
        _ => base.checked_sub(steps),
    }
}

fn signed_delta(from: usize, to: usize) -> i64 {
    // grid coordinates are tiny, the casts cannot wrap
    to as i64 - from as i64
}

static HORIZONTAL: [Direction; 2] = [Direction::EAST, Direction::WEST];
static VERTICAL: [Direction; 2] = [Direction::SOUTH, Direction::NORTH];
static DIAGONAL: [Direction; 4] = [
    Direction::SOUTH_EAST,
    Direction::SOUTH_WEST,
    Direction::NORTH_EAST,
    Direction::NORTH_WEST,
];

/// A family of directions tried together at one start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisGroup {
    Horizontal,
    Vertical,
    Diagonal,
}

impl AxisGroup {
    /// Scanner order: horizontal, then vertical, then diagonal.
    pub const ALL: [AxisGroup; 3] = [AxisGroup::Horizontal, AxisGroup::Vertical, AxisGroup::Diagonal];

    /// Directions in trial order; the first success wins.
    ///
    /// - Horizontal: `+1` then `-1`.
    /// - Vertical: `+1` (down) then `-1` (up).
    /// - Diagonal: `dy` outer loop over `{+1, -1}`, `dx` inner loop over `{+1, -1}`.
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            AxisGroup::Horizontal => &HORIZONTAL,
            AxisGroup::Vertical => &VERTICAL,
            AxisGroup::Diagonal => &DIAGONAL,
        }
    }
}

impl fmt::Display for AxisGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AxisGroup::Horizontal => "horizontal",
            AxisGroup::Vertical => "vertical",
            AxisGroup::Diagonal => "diagonal",
        };
        f.write_str(name)
    }
}
