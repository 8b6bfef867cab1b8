//! # ember-tui
//!
//! Policy-driven layout engine for terminal widget toolkits.
//!
//! Given a container and its ordered children, ember-tui divides the
//! container's cells per child according to each child's sizing policy:
//! mandatory policies (Fixed, Minimum, MinimumExpanding) are paid exactly
//! their hint, elastic policies compete for the rest by stretch weight
//! within priority tiers, and hard min/max bounds are always respected.
//! When mandatory constraints cannot fit, the pass reports the container
//! too small and leaves prior geometry untouched.
//!
//! ## Architecture
//!
//! ```text
//! LinearLayout → solve (per axis) → distribute | collect → LayoutSink callbacks
//! ```
//!
//! The engine is a library surface, not a framework: it needs only a
//! read-only [`geometry::GeometryDescriptor`] per child and a
//! [`layout::LayoutSink`] to deliver resize/move notifications. Rendering,
//! input, and event dispatch belong to the caller.
//!
//! ## Modules
//!
//! - [`geometry`] - Size policies, two-axis descriptors, cell rectangles
//! - [`border`] - Border walls/corners and the cells they consume
//! - [`layout`] - Solver, distributor, collector, and the coordinator
//!
//! ## Example
//!
//! ```
//! use ember_tui::{Border, Container, GeometryDescriptor, LayoutSink, LinearLayout, Rect, SizePolicy};
//!
//! struct Stdout;
//! impl LayoutSink for Stdout {
//!     fn resize(&mut self, child: usize, width: u16, height: u16) {
//!         println!("child {child}: {width}x{height}");
//!     }
//!     fn moved(&mut self, child: usize, x: u16, y: u16) {
//!         println!("child {child}: at ({x}, {y})");
//!     }
//! }
//!
//! let mut container = Container::new(Rect::new(0, 0, 80, 24), Border::none());
//! let children = [
//!     GeometryDescriptor::new(SizePolicy::expanding(1), SizePolicy::fixed(1)),
//!     GeometryDescriptor::new(SizePolicy::expanding(1), SizePolicy::expanding(1)),
//! ];
//! LinearLayout::vertical().layout(&mut container, &children, &mut Stdout);
//! ```

pub mod border;
pub mod geometry;
pub mod layout;

// Re-export commonly used items
pub use border::{Border, BorderEdges};
pub use geometry::{Axis, GeometryDescriptor, Policy, PolicyError, Rect, SizePolicy, UNBOUNDED};
pub use layout::{solve, AllocationResult, Container, LayoutOutcome, LayoutSink, LinearLayout};
