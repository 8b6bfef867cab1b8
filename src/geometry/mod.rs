//! Geometry - the data the layout engine consumes.
//!
//! Pure data, no behavior beyond validation and clamping: size policies,
//! two-axis descriptors, and cell-grid rectangles. Everything here is
//! `Copy` and lives in parallel arrays during a pass.

mod descriptor;
mod size_policy;

pub use descriptor::{Axis, GeometryDescriptor, Rect};
pub use size_policy::{Policy, PolicyError, SizePolicy, UNBOUNDED};
