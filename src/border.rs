//! Border - wall and corner enablement for a container.
//!
//! The layout engine does not draw borders; it only needs to know how many
//! cells a border steals from each side of a container so children can be
//! budgeted and positioned inside it. A side costs one cell when the border
//! is enabled and that side's wall or an adjoining corner is enabled.

use crate::geometry::Axis;

bitflags::bitflags! {
    /// Which walls and corners of a border are switched on.
    ///
    /// Combine with bitwise OR: `BorderEdges::NORTH | BorderEdges::WEST`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BorderEdges: u8 {
        const NONE = 0;
        const NORTH = 1 << 0;
        const SOUTH = 1 << 1;
        const EAST = 1 << 2;
        const WEST = 1 << 3;
        const NORTH_WEST = 1 << 4;
        const NORTH_EAST = 1 << 5;
        const SOUTH_WEST = 1 << 6;
        const SOUTH_EAST = 1 << 7;

        const WALLS = Self::NORTH.bits()
            | Self::SOUTH.bits()
            | Self::EAST.bits()
            | Self::WEST.bits();
        const CORNERS = Self::NORTH_WEST.bits()
            | Self::NORTH_EAST.bits()
            | Self::SOUTH_WEST.bits()
            | Self::SOUTH_EAST.bits();
        const ALL = Self::WALLS.bits() | Self::CORNERS.bits();
    }
}

/// Border state of a container widget.
///
/// Disabled borders cost nothing regardless of which edges are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Border {
    pub enabled: bool,
    pub edges: BorderEdges,
}

impl Border {
    /// A border with every wall and corner on.
    pub const fn full() -> Self {
        Self {
            enabled: true,
            edges: BorderEdges::ALL,
        }
    }

    /// No border at all.
    pub const fn none() -> Self {
        Self {
            enabled: false,
            edges: BorderEdges::NONE,
        }
    }

    /// Enable the four walls, leaving corners untouched.
    pub fn enable_walls(&mut self) {
        self.edges |= BorderEdges::WALLS;
    }

    /// Disable the four walls.
    pub fn disable_walls(&mut self) {
        self.edges &= !BorderEdges::WALLS;
    }

    /// Enable the four corners, leaving walls untouched.
    pub fn enable_corners(&mut self) {
        self.edges |= BorderEdges::CORNERS;
    }

    /// Disable the four corners.
    pub fn disable_corners(&mut self) {
        self.edges &= !BorderEdges::CORNERS;
    }

    fn side_cost(&self, wall: BorderEdges, corners: BorderEdges) -> u16 {
        if self.enabled && self.edges.intersects(wall | corners) {
            1
        } else {
            0
        }
    }

    /// Cells consumed on the west side.
    #[inline]
    pub fn west_offset(&self) -> u16 {
        self.side_cost(
            BorderEdges::WEST,
            BorderEdges::NORTH_WEST | BorderEdges::SOUTH_WEST,
        )
    }

    /// Cells consumed on the east side.
    #[inline]
    pub fn east_offset(&self) -> u16 {
        self.side_cost(
            BorderEdges::EAST,
            BorderEdges::NORTH_EAST | BorderEdges::SOUTH_EAST,
        )
    }

    /// Cells consumed on the north side.
    #[inline]
    pub fn north_offset(&self) -> u16 {
        self.side_cost(
            BorderEdges::NORTH,
            BorderEdges::NORTH_WEST | BorderEdges::NORTH_EAST,
        )
    }

    /// Cells consumed on the south side.
    #[inline]
    pub fn south_offset(&self) -> u16 {
        self.side_cost(
            BorderEdges::SOUTH,
            BorderEdges::SOUTH_WEST | BorderEdges::SOUTH_EAST,
        )
    }

    /// `(leading, trailing)` cell cost along the given axis.
    pub fn offsets(&self, axis: Axis) -> (u16, u16) {
        match axis {
            Axis::Horizontal => (self.west_offset(), self.east_offset()),
            Axis::Vertical => (self.north_offset(), self.south_offset()),
        }
    }
}
