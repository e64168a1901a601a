//! The cube: 27 cells on a 3x3x3 grid, twisted one layer at a time.

use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::color::Color;
use crate::errors::TwistError;
use crate::side::{Axis, Side};
use crate::slots::shift_cycle;

/// Grid coordinate of a cell, each component in `0..3`.
type Pos = (usize, usize, usize);

/// The 3x3x3 cell grid, indexed by `(x, y, z)`.
///
/// A private newtype so cells can be moved through [`shift_cycle`] without
/// exposing mutable cell access outside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Grid([[[Cell; 3]; 3]; 3]);

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, (x, y, z): Pos) -> &Cell {
        &self.0[x][y][z]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, (x, y, z): Pos) -> &mut Cell {
        &mut self.0[x][y][z]
    }
}

/// Perimeter of a slice's 3x3 cross-section, walked in cyclic order.
///
/// Written for the x = 0 slice; [`ring`] shifts it to the chosen layer and
/// relabels coordinates for the other axes. The slice's center cell is not
/// part of the ring.
const RING: [Pos; 8] = [
    (0, 0, 0),
    (0, 1, 0),
    (0, 2, 0),
    (0, 2, 1),
    (0, 2, 2),
    (0, 1, 2),
    (0, 0, 2),
    (0, 0, 1),
];

/// The eight ring positions of layer `layer` along `axis`.
fn ring(axis: Axis, layer: usize) -> [Pos; 8] {
    RING.map(|(x, y, z)| {
        let x = x + layer;
        match axis {
            Axis::X => (x, y, z),
            Axis::Y => (z, x, y),
            Axis::Z => (y, z, x),
        }
    })
}

/// The center cell of layer `layer` along `axis`.
fn center(axis: Axis, layer: usize) -> Pos {
    match axis {
        Axis::X => (layer, 1, 1),
        Axis::Y => (1, layer, 1),
        Axis::Z => (1, 1, layer),
    }
}

/// Grid coordinate of the sticker at `(row, col)` of a face, row 0 at the
/// top of the face as displayed.
///
/// These formulas fix the camera convention for every face read and must
/// stay consistent with each other for the net to render as one cube.
const fn facelet(side: Side, row: usize, col: usize) -> Pos {
    match side {
        Side::Front => (col, 2 - row, 2),
        Side::Back => (2 - col, 2 - row, 0),
        Side::Left => (0, 2 - row, col),
        Side::Right => (2, 2 - row, 2 - col),
        Side::Bottom => (col, 0, 2 - row),
        Side::Top => (col, 2, row),
    }
}

/// A 3x3x3 twisty puzzle.
///
/// Constructed solved, then mutated only through [`Cube::rotate`]. Cells are
/// owned exclusively by the cube; the public surface reads whole faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    grid: Grid,
}

impl Cube {
    /// A solved cube: each outer face painted one distinct color.
    #[must_use]
    pub fn solved() -> Self {
        let mut cube = Self {
            grid: Grid([[[Cell::hidden(); 3]; 3]; 3]),
        };
        for (side, color) in [
            (Side::Front, Color::Red),
            (Side::Back, Color::Orange),
            (Side::Left, Color::Green),
            (Side::Right, Color::Blue),
            (Side::Bottom, Color::Yellow),
            (Side::Top, Color::White),
        ] {
            for row in 0..3 {
                for col in 0..3 {
                    cube.grid[facelet(side, row, col)].paint(side, color);
                }
            }
        }
        cube
    }

    /// The nine sticker colors of `side`, row-major, row 0 at the top of
    /// the face as displayed.
    #[must_use]
    pub fn face(&self, side: Side) -> [Color; 9] {
        let mut colors = [Color::Hidden; 9];
        for row in 0..3 {
            for col in 0..3 {
                colors[row * 3 + col] = self.grid[facelet(side, row, col)].sticker(side);
            }
        }
        colors
    }

    /// Twists layer `layer` along `axis` a quarter turn.
    ///
    /// Layers are numbered 0..=2 in coordinate order along the axis. Each
    /// twist relocates the eight ring cells of the slice two ring positions
    /// on, then spins every cell in the slice so its stickers match its new
    /// orientation. Four identical twists restore the cube.
    pub fn rotate(&mut self, axis: Axis, layer: usize) -> Result<(), TwistError> {
        if layer > 2 {
            return Err(TwistError::LayerOutOfRange { layer });
        }

        let ring = ring(axis, layer);
        // Two single steps around the eight-position ring: each boundary
        // cell advances two positions, a quarter of the way around.
        for _ in 0..2 {
            shift_cycle(&mut self.grid, ring);
        }
        for pos in ring {
            self.grid[pos].spin(axis);
        }
        self.grid[center(axis, layer)].spin(axis);
        Ok(())
    }

    /// True when every face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Side::ALL.into_iter().all(|side| {
            let face = self.face(side);
            face.iter().all(|&color| color == face[0])
        })
    }

    /// The cell at `pos`, for invariant checks in tests.
    #[cfg(test)]
    pub(crate) fn cell(&self, pos: Pos) -> &Cell {
        &self.grid[pos]
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}
