//! Sliding-tile puzzle on a `width × height` board.
//!
//! Cells are listed row-major with `0` for the blank; the goal is tiles
//! `1..n-1` in reading order with the blank in the last cell. The heuristic
//! is the sum of Manhattan distances of the non-blank tiles, admissible and
//! consistent for unit-cost slides.

use std::fmt;

use searchlab_core::domain::{SearchDomain, Successor};

use super::ParseError;

/// The direction the blank moves in one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Slide {
    const ALL: [Slide; 4] = [Slide::Up, Slide::Down, Slide::Left, Slide::Right];
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// A board position: the cell contents plus the cached blank index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileState {
    pub cells: Vec<u8>,
    pub blank: usize,
}

/// A sliding-tile instance.
#[derive(Debug, Clone)]
pub struct SlidingTiles {
    width: usize,
    height: usize,
    start: TileState,
}

impl SlidingTiles {
    /// Build an instance from the start cells, row-major, `0` = blank.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the cells are not a permutation of
    /// `0..width*height` or the board is smaller than 2×2.
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, ParseError> {
        let n = width * height;
        if width < 2 || height < 2 {
            return Err(ParseError::new("board must be at least 2x2"));
        }
        if cells.len() != n {
            return Err(ParseError::new(format!(
                "expected {n} cells, got {}",
                cells.len()
            )));
        }
        let mut seen = vec![false; n];
        for &tile in &cells {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or_else(|| ParseError::new(format!("tile {tile} out of range")))?;
            if *slot {
                return Err(ParseError::new(format!("tile {tile} appears twice")));
            }
            *slot = true;
        }
        let blank = cells
            .iter()
            .position(|&tile| tile == 0)
            .ok_or_else(|| ParseError::new("no blank cell"))?;
        Ok(Self {
            width,
            height,
            start: TileState { cells, blank },
        })
    }

    /// The canonical 15-puzzle shape.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `cells` is not a 16-cell permutation.
    pub fn fifteen(cells: Vec<u8>) -> Result<Self, ParseError> {
        Self::new(4, 4, cells)
    }

    /// Goal cell index of a tile: tile `t` belongs at index `t - 1`, the
    /// blank at the last cell.
    fn goal_index(&self, tile: u8) -> usize {
        if tile == 0 {
            self.width * self.height - 1
        } else {
            tile as usize - 1
        }
    }

    fn manhattan(&self, from: usize, to: usize) -> usize {
        let (fx, fy) = (from % self.width, from / self.width);
        let (tx, ty) = (to % self.width, to / self.width);
        fx.abs_diff(tx) + fy.abs_diff(ty)
    }
}

impl SearchDomain for SlidingTiles {
    type State = TileState;
    type Ident = Vec<u8>;
    type Op = Slide;

    fn initial(&self) -> TileState {
        self.start.clone()
    }

    fn is_goal(&self, state: &TileState) -> bool {
        state
            .cells
            .iter()
            .enumerate()
            .all(|(index, &tile)| self.goal_index(tile) == index)
    }

    fn successors(&self, state: &TileState) -> Vec<Successor<Slide, TileState>> {
        let (bx, by) = (state.blank % self.width, state.blank / self.width);
        let mut out = Vec::with_capacity(4);
        for slide in Slide::ALL {
            let target = match slide {
                Slide::Up if by > 0 => state.blank - self.width,
                Slide::Down if by + 1 < self.height => state.blank + self.width,
                Slide::Left if bx > 0 => state.blank - 1,
                Slide::Right if bx + 1 < self.width => state.blank + 1,
                _ => continue,
            };
            let mut cells = state.cells.clone();
            cells.swap(state.blank, target);
            out.push(Successor {
                op: slide,
                state: TileState {
                    cells,
                    blank: target,
                },
                cost: 1.0,
            });
        }
        out
    }

    fn heuristic(&self, state: &TileState) -> f64 {
        let total: usize = state
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| self.manhattan(index, self.goal_index(tile)))
            .sum();
        total as f64
    }

    fn identity(&self, state: &TileState) -> Vec<u8> {
        state.cells.clone()
    }
}
