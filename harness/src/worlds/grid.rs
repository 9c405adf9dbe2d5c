//! Grid navigation: 4-connected unit-cost movement on a board with blocked
//! cells.
//!
//! The instance text format matches the board files the generators emit:
//!
//! ```text
//! <height> <width>
//! Board:
//! <row y = height-1>
//! ...
//! <row y = 0>
//! ```
//!
//! followed by an optional blank line. Cells: `#` blocked, `V` the start,
//! `*` a goal, space free. Rows are printed top row first. Several goals are
//! allowed; the heuristic is the Manhattan distance to the nearest one,
//! which keeps it admissible and consistent.

use std::collections::HashSet;
use std::fmt;

use searchlab_core::domain::{SearchDomain, Successor};

use super::ParseError;

/// One unit move of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    North,
    South,
    West,
    East,
}

impl GridMove {
    const ALL: [GridMove; 4] = [
        GridMove::North,
        GridMove::South,
        GridMove::West,
        GridMove::East,
    ];

    fn delta(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::West => (-1, 0),
            Self::East => (1, 0),
        }
    }
}

impl fmt::Display for GridMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        };
        write!(f, "{name}")
    }
}

/// A parsed grid-navigation instance. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct GridNav {
    width: usize,
    height: usize,
    /// Row-major blocked flags, index `y * width + x`.
    blocked: Vec<bool>,
    start: (usize, usize),
    goals: Vec<(usize, usize)>,
    goal_cells: HashSet<usize>,
}

impl GridNav {
    /// Parse an instance from board text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on a malformed header, wrong row count or
    /// width, an unknown cell character, no start, more than one start, or
    /// no goal.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .ok_or_else(|| ParseError::new("missing size header"))?;
        let mut sizes = header.split_whitespace();
        let height: usize = sizes
            .next()
            .and_then(|tok| tok.parse().ok())
            .ok_or_else(|| ParseError::new("bad height"))?;
        let width: usize = sizes
            .next()
            .and_then(|tok| tok.parse().ok())
            .ok_or_else(|| ParseError::new("bad width"))?;
        if height == 0 || width == 0 {
            return Err(ParseError::new("board must be non-empty"));
        }
        match lines.next() {
            Some("Board:") => {}
            other => {
                return Err(ParseError::new(format!(
                    "expected \"Board:\", got {other:?}"
                )))
            }
        }

        let mut blocked = vec![false; width * height];
        let mut start = None;
        let mut goals = Vec::new();
        // Rows are printed top (y = height-1) first.
        for dy in 0..height {
            let y = height - 1 - dy;
            let row = lines
                .next()
                .ok_or_else(|| ParseError::new(format!("missing board row {dy}")))?;
            if row.chars().count() != width {
                return Err(ParseError::new(format!(
                    "row {dy} has width {}, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, cell) in row.chars().enumerate() {
                match cell {
                    '#' => blocked[y * width + x] = true,
                    'V' => {
                        if start.replace((x, y)).is_some() {
                            return Err(ParseError::new("more than one start cell"));
                        }
                    }
                    '*' => goals.push((x, y)),
                    ' ' => {}
                    other => {
                        return Err(ParseError::new(format!("unknown cell character {other:?}")))
                    }
                }
            }
        }

        let start = start.ok_or_else(|| ParseError::new("no start cell"))?;
        if goals.is_empty() {
            return Err(ParseError::new("no goal cell"));
        }
        let goal_cells = goals.iter().map(|&(x, y)| y * width + x).collect();
        Ok(Self {
            width,
            height,
            blocked,
            start,
            goals,
            goal_cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn cell(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl SearchDomain for GridNav {
    type State = (usize, usize);
    type Ident = usize;
    type Op = GridMove;

    fn initial(&self) -> (usize, usize) {
        self.start
    }

    fn is_goal(&self, &(x, y): &(usize, usize)) -> bool {
        self.goal_cells.contains(&self.cell(x, y))
    }

    fn successors(&self, &(x, y): &(usize, usize)) -> Vec<Successor<GridMove, (usize, usize)>> {
        let mut out = Vec::with_capacity(4);
        for mv in GridMove::ALL {
            let (dx, dy) = mv.delta();
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx as usize >= self.width || ny as usize >= self.height {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if self.blocked[self.cell(nx, ny)] {
                continue;
            }
            out.push(Successor {
                op: mv,
                state: (nx, ny),
                cost: 1.0,
            });
        }
        out
    }

    fn heuristic(&self, &(x, y): &(usize, usize)) -> f64 {
        self.goals
            .iter()
            .map(|&(gx, gy)| x.abs_diff(gx) + y.abs_diff(gy))
            .min()
            .map_or(0.0, |d| d as f64)
    }

    fn identity(&self, &(x, y): &(usize, usize)) -> usize {
        self.cell(x, y)
    }
}
