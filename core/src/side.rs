//! The six sides of the cube's frame and the three twist axes.

use std::fmt;

/// One of the six oriented directions in the cube's own frame.
///
/// A `Side` names both the direction a sticker faces and the exterior face
/// read by [`crate::Cube::face`] - they are the same six values. Sides are
/// fixed relative to the cube, not the viewer: twisting a layer changes
/// which sticker faces a side, never what the side means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 6] = [
        Side::Front,
        Side::Back,
        Side::Right,
        Side::Left,
        Side::Top,
        Side::Bottom,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
            Side::Right => "right",
            Side::Left => "left",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }

    /// Slot index into a cell's sticker array.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A twist axis, aligned with one coordinate dimension of the cube grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// The four sides a cell's stickers cycle through, in order, when the
    /// cell spins a quarter turn about this axis. The two sides on the axis
    /// itself stay put.
    ///
    /// The cycle direction must agree with the ring relocation direction in
    /// [`crate::Cube::rotate`]; the fourth-power identity tests pin the pair
    /// down.
    pub(crate) const fn spin_cycle(self) -> [Side; 4] {
        match self {
            Axis::X => [Side::Front, Side::Bottom, Side::Back, Side::Top],
            Axis::Y => [Side::Front, Side::Right, Side::Back, Side::Left],
            Axis::Z => [Side::Top, Side::Left, Side::Bottom, Side::Right],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
