//! Layout coordinator - one pass per container.
//!
//! The coordinator runs the allocation solver on the stacking axis, bound
//! checks the cross axis with a simpler per-policy rule, then walks the
//! children in order handing each its new size and absolute position
//! through direct synchronous [`LayoutSink`] callbacks. Whether the
//! collaborator defers those onto an event queue is its concern, not the
//! engine's.
//!
//! A pass owns its working extents exclusively and performs no I/O. Passes
//! run on a single logical thread; a notification handler re-laying-out an
//! ancestor simply nests on the call stack and completes before control
//! returns. On a too-small pass the container flag is set, nothing is
//! delivered, and the children keep their previous geometry until a later
//! pass succeeds.

use tracing::{debug, trace};

use crate::border::Border;
use crate::geometry::{Axis, GeometryDescriptor, Policy, Rect, SizePolicy};

use super::{solve, LayoutOutcome};

// =============================================================================
// Container
// =============================================================================

/// The container side of a layout pass: where it sits, what its border
/// costs, and whether the last pass fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Container {
    pub rect: Rect,
    pub border: Border,
    /// Set when the last pass could not satisfy mandatory constraints;
    /// cleared by the next successful pass.
    pub too_small: bool,
}

impl Container {
    pub const fn new(rect: Rect, border: Border) -> Self {
        Self {
            rect,
            border,
            too_small: false,
        }
    }
}

// =============================================================================
// LayoutSink
// =============================================================================

/// Receiver for end-of-pass geometry notifications.
///
/// Both callbacks fire per surviving child, in child order, after a
/// successful pass: `resize` first, then `moved` with absolute terminal
/// coordinates. A too-small pass delivers nothing.
pub trait LayoutSink {
    fn resize(&mut self, child: usize, width: u16, height: u16);
    fn moved(&mut self, child: usize, x: u16, y: u16);
}

// =============================================================================
// LinearLayout
// =============================================================================

/// Stacks children along one axis, sizing them by their policies.
///
/// One type covers both orientations; the stacking axis is solved with the
/// full tier algorithm and the cross axis is bound checked per child.
///
/// # Example
///
/// ```
/// use ember_tui::border::Border;
/// use ember_tui::geometry::{GeometryDescriptor, Rect, SizePolicy};
/// use ember_tui::layout::{Container, LayoutSink, LinearLayout};
///
/// struct Recorder(Vec<(usize, u16, u16)>);
/// impl LayoutSink for Recorder {
///     fn resize(&mut self, child: usize, width: u16, height: u16) {
///         self.0.push((child, width, height));
///     }
///     fn moved(&mut self, _child: usize, _x: u16, _y: u16) {}
/// }
///
/// let mut container = Container::new(Rect::new(0, 0, 20, 6), Border::none());
/// let children = [
///     GeometryDescriptor::new(SizePolicy::expanding(1), SizePolicy::fixed(1)),
///     GeometryDescriptor::new(SizePolicy::expanding(1), SizePolicy::expanding(1)),
/// ];
/// let mut sink = Recorder(Vec::new());
/// LinearLayout::vertical().layout(&mut container, &children, &mut sink);
/// assert_eq!(sink.0, vec![(0, 20, 1), (1, 20, 5)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearLayout {
    axis: Axis,
}

impl LinearLayout {
    pub const fn new(axis: Axis) -> Self {
        Self { axis }
    }

    /// Children stacked top to bottom.
    pub const fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Children stacked left to right.
    pub const fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// The stacking axis.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Run one layout pass.
    ///
    /// Invoked on container resize or child add/remove. `children` is the
    /// container's ordered child sequence, already filtered to widgets by
    /// the caller; descriptors are read-only for the whole pass.
    pub fn layout(
        &self,
        container: &mut Container,
        children: &[GeometryDescriptor],
        sink: &mut dyn LayoutSink,
    ) {
        let stacking = self.axis;
        let cross = stacking.cross();
        let (lead_main, trail_main) = container.border.offsets(stacking);
        let (lead_cross, trail_cross) = container.border.offsets(cross);

        let budget = container
            .rect
            .extent(stacking)
            .saturating_sub(lead_main + trail_main);
        trace!(
            axis = ?stacking,
            children = children.len(),
            budget,
            "layout pass"
        );

        let primary: Vec<SizePolicy> = children.iter().map(|d| *d.policy(stacking)).collect();
        let LayoutOutcome::Allocated(main_extents) = solve(&primary, budget) else {
            debug!(axis = ?stacking, "container too small on stacking axis");
            container.too_small = true;
            return;
        };

        // Cross axis: per-policy bound check against the available extent.
        let available = container
            .rect
            .extent(cross)
            .saturating_sub(lead_cross + trail_cross);
        let mut cross_extents: Vec<u16> = Vec::with_capacity(children.len());
        for descriptor in children {
            match cross_extent(descriptor.policy(cross), available) {
                Some(extent) => cross_extents.push(extent),
                None => {
                    debug!(axis = ?cross, "container too small on cross axis");
                    container.too_small = true;
                    return;
                }
            }
        }

        container.too_small = false;

        // Notify in child order: resize, then move, accumulating origins
        // along the stacking axis inside the border.
        let mut along = container.rect.origin(stacking) + lead_main;
        let across = container.rect.origin(cross) + lead_cross;
        for (child, (&main, &cross_ext)) in
            main_extents.iter().zip(cross_extents.iter()).enumerate()
        {
            let (width, height) = match stacking {
                Axis::Vertical => (cross_ext, main),
                Axis::Horizontal => (main, cross_ext),
            };
            sink.resize(child, width, height);
            let (x, y) = match stacking {
                Axis::Vertical => (across, along),
                Axis::Horizontal => (along, across),
            };
            sink.moved(child, x, y);
            along += main;
        }
    }
}

/// Resolve one child's cross-axis extent, or `None` when its bounds cannot
/// be met inside `available`.
fn cross_extent(policy: &SizePolicy, available: u16) -> Option<u16> {
    match policy.policy() {
        // Fixed demands its exact hint.
        Policy::Fixed => (policy.hint() <= available).then_some(policy.hint()),
        // Full available extent, clamped downward to max.
        Policy::Ignored | Policy::Preferred | Policy::Expanding => {
            let extent = available.min(policy.max());
            (extent >= policy.min()).then_some(extent)
        }
        // Available extent capped at the hint.
        Policy::Maximum => {
            let extent = available.min(policy.hint());
            (extent >= policy.min()).then_some(extent)
        }
        // At least the hint, which therefore has to fit.
        Policy::Minimum | Policy::MinimumExpanding => {
            let extent = available.max(policy.hint());
            (extent <= policy.max() && extent <= available).then_some(extent)
        }
    }
}
