//! Layout engine - policy-tier constraint allocation for one container.
//!
//! # Architecture
//!
//! One pass per container, leaves first:
//!
//! 1. [`solve`] resolves the stacking axis: mandatory policies are paid
//!    their hint, Ignored widgets take their stretch share, the hint tier
//!    takes its hint, then surplus or deficit is handed off.
//! 2. The distributor spreads surplus by stretch-weighted priority groups.
//! 3. The collector claws back deficit, inverse-stretch weighted, down to
//!    each widget's minimum.
//! 4. [`LinearLayout`] orchestrates both axes, positions children inside
//!    the container's border, and delivers resize/move callbacks.
//!
//! All working state is transient: a pass allocates its extent arrays,
//! resolves them, notifies, and drops them. Nothing is cached between
//! passes, so re-running an unchanged pass re-emits identical geometry.

mod collect;
mod coordinator;
mod distribute;
mod solver;

pub(crate) use collect::collect;
pub(crate) use distribute::distribute;

pub use coordinator::{Container, LayoutSink, LinearLayout};
pub use solver::solve;

// =============================================================================
// Outcome types
// =============================================================================

/// Per-child extents along one axis, indexed exactly like the input
/// children. Order is load-bearing: entry `n` belongs to child `n`.
pub type AllocationResult = Vec<u16>;

/// Terminal outcome of one solver run. Never persisted across passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutOutcome {
    /// Every constraint satisfied; extents are final.
    Allocated(AllocationResult),
    /// Mandatory constraints cannot fit the budget. Prior geometry stands.
    TooSmall,
}

impl LayoutOutcome {
    /// True when the pass could not satisfy mandatory constraints.
    #[inline]
    pub fn is_too_small(&self) -> bool {
        matches!(self, LayoutOutcome::TooSmall)
    }

    /// The resolved extents, if any.
    pub fn extents(&self) -> Option<&[u16]> {
        match self {
            LayoutOutcome::Allocated(extents) => Some(extents),
            LayoutOutcome::TooSmall => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let allocated = LayoutOutcome::Allocated(vec![3, 5]);
        assert!(!allocated.is_too_small());
        assert_eq!(allocated.extents(), Some(&[3u16, 5][..]));

        let too_small = LayoutOutcome::TooSmall;
        assert!(too_small.is_too_small());
        assert_eq!(too_small.extents(), None);
    }
}
