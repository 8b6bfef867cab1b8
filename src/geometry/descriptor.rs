//! Geometry descriptor - the per-widget record the layout engine reads.
//!
//! One `GeometryDescriptor` per widget: a horizontal and a vertical
//! `SizePolicy`. The engine treats descriptors as read-only for the whole
//! pass; the widget owns them and mutates them only between passes.

use super::size_policy::SizePolicy;

// =============================================================================
// Axis
// =============================================================================

/// One of the two terminal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// Absolute rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size along the given axis.
    #[inline]
    pub const fn extent(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Origin coordinate along the given axis.
    #[inline]
    pub const fn origin(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

// =============================================================================
// GeometryDescriptor
// =============================================================================

/// Both axes of a widget's sizing constraints.
///
/// # Example
///
/// ```
/// use ember_tui::geometry::{Axis, GeometryDescriptor, SizePolicy};
///
/// let desc = GeometryDescriptor::new(
///     SizePolicy::expanding(1),
///     SizePolicy::fixed(1),
/// );
/// assert_eq!(desc.policy(Axis::Vertical).hint(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometryDescriptor {
    pub horizontal: SizePolicy,
    pub vertical: SizePolicy,
}

impl GeometryDescriptor {
    pub const fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The policy governing the given axis.
    #[inline]
    pub const fn policy(&self, axis: Axis) -> &SizePolicy {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }

    #[test]
    fn test_rect_accessors() {
        let rect = Rect::new(3, 5, 40, 12);
        assert_eq!(rect.extent(Axis::Horizontal), 40);
        assert_eq!(rect.extent(Axis::Vertical), 12);
        assert_eq!(rect.origin(Axis::Horizontal), 3);
        assert_eq!(rect.origin(Axis::Vertical), 5);
    }

    #[test]
    fn test_descriptor_axis_selection() {
        let desc = GeometryDescriptor::new(SizePolicy::fixed(8), SizePolicy::expanding(2));
        assert_eq!(desc.policy(Axis::Horizontal).hint(), 8);
        assert_eq!(desc.policy(Axis::Vertical).stretch(), 2);
    }
}
