//! A single cubelet and its sticker labeling.

use std::ops::{Index, IndexMut};

use crate::color::Color;
use crate::side::{Axis, Side};
use crate::slots::shift_cycle;

/// One of the 27 cubelets: a mapping from each side of the cube's frame to
/// the sticker color currently facing that way.
///
/// Every cell carries all six slots. Slots facing the cube's interior hold
/// [`Color::Hidden`]; exactly the slots on the exterior at the cell's
/// current grid position hold a real color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    stickers: [Color; 6],
}

impl Cell {
    /// A cell with no visible stickers yet.
    pub(crate) const fn hidden() -> Self {
        Self {
            stickers: [Color::Hidden; 6],
        }
    }

    /// The sticker color currently facing `side`.
    #[must_use]
    pub fn sticker(&self, side: Side) -> Color {
        self.stickers[side.index()]
    }

    /// Assigns the sticker facing `side`. Only construction paints cells;
    /// twists merely relocate and relabel them.
    pub(crate) fn paint(&mut self, side: Side, color: Color) {
        self.stickers[side.index()] = color;
    }

    /// Spins the cell's own labeling a quarter turn about `axis`, so the
    /// stickers track the cell's new physical orientation after its layer
    /// twists. The two slots on the axis are untouched.
    pub(crate) fn spin(&mut self, axis: Axis) {
        shift_cycle(self, axis.spin_cycle());
    }
}

impl Index<Side> for Cell {
    type Output = Color;

    fn index(&self, side: Side) -> &Color {
        &self.stickers[side.index()]
    }
}

impl IndexMut<Side> for Cell {
    fn index_mut(&mut self, side: Side) -> &mut Color {
        &mut self.stickers[side.index()]
    }
}
