//! Allocation solver - resolves one axis of one container.
//!
//! Tiers, in order (mandatory policies win before elastic ones compete):
//!
//! 1. {Fixed, Minimum, MinimumExpanding} get exactly their hint. A budget
//!    overrun here is immediately [`LayoutOutcome::TooSmall`].
//! 2. {Ignored} get their stretch share of the *original* budget, clamped
//!    to their bounds.
//! 3. {Maximum, Preferred, Expanding} get exactly their hint.
//! 4. Surplus goes to the distributor, deficit to the collector. Only a
//!    deficit the collector cannot resolve is too small.
//!
//! The result is a parallel array keyed by child index; nothing aliases
//! the input descriptors.

use tracing::{debug, trace};

use crate::geometry::{Policy, SizePolicy};

use super::{collect, distribute, LayoutOutcome};

/// Resolve per-child extents along a single axis.
///
/// Identical inputs always produce identical extents. Empty `children`
/// allocates an empty result for any budget.
///
/// # Panics
///
/// If a tier needs a proportional split and its total stretch is zero;
/// that is a precondition violation by the caller's descriptors.
///
/// # Example
///
/// ```
/// use ember_tui::geometry::SizePolicy;
/// use ember_tui::layout::{solve, LayoutOutcome};
///
/// let children = [
///     SizePolicy::fixed(2),
///     SizePolicy::expanding(1),
///     SizePolicy::expanding(3),
/// ];
/// assert_eq!(
///     solve(&children, 20),
///     LayoutOutcome::Allocated(vec![2, 4, 14]),
/// );
/// ```
pub fn solve(children: &[SizePolicy], budget: u16) -> LayoutOutcome {
    if children.is_empty() {
        return LayoutOutcome::Allocated(Vec::new());
    }

    let mut extents = vec![0u16; children.len()];
    let mut remaining = budget as i32;

    // Tier 1: mandatory policies are paid their hint unconditionally.
    for (i, child) in children.iter().enumerate() {
        if child.policy().is_mandatory() {
            extents[i] = child.hint();
            remaining -= child.hint() as i32;
        }
    }
    if remaining < 0 {
        debug!(budget, overrun = -remaining, "mandatory tier over budget");
        return LayoutOutcome::TooSmall;
    }

    // Tier 2: Ignored widgets take their stretch share of the original
    // budget, clamped to their bounds.
    if children.iter().any(|c| c.policy() == Policy::Ignored) {
        let total: u32 = children.iter().map(|c| c.stretch() as u32).sum();
        assert!(total > 0, "ignored tier requires nonzero total stretch");
        for (i, child) in children.iter().enumerate() {
            if child.policy() == Policy::Ignored {
                let share = (budget as u32 * child.stretch() as u32 / total) as u16;
                let share = child.clamp(share);
                extents[i] = share;
                remaining -= share as i32;
            }
        }
    }

    // Tier 3: the hint tier.
    for (i, child) in children.iter().enumerate() {
        if matches!(
            child.policy(),
            Policy::Maximum | Policy::Preferred | Policy::Expanding
        ) {
            extents[i] = child.hint();
            remaining -= child.hint() as i32;
        }
    }

    if remaining > 0 {
        let leftover = distribute(children, &mut extents, remaining as u16);
        if leftover > 0 {
            // Every elastic member pinned at max: tolerated, not an error.
            trace!(leftover, "surplus unspent, all members at max");
        }
    } else if remaining < 0 {
        let unresolved = collect(children, &mut extents, (-remaining) as u16);
        if unresolved > 0 {
            debug!(unresolved, "deficit unresolved after shrink tiers");
            return LayoutOutcome::TooSmall;
        }
    }

    LayoutOutcome::Allocated(extents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Policy, SizePolicy, UNBOUNDED};

    #[test]
    fn test_empty_children_any_budget() {
        assert_eq!(solve(&[], 0), LayoutOutcome::Allocated(vec![]));
        assert_eq!(solve(&[], 500), LayoutOutcome::Allocated(vec![]));
    }

    #[test]
    fn test_fixed_and_expanding_split() {
        // Budget 20: fixed takes 2, the rest splits 1:3 into 4 and 14.
        let children = [
            SizePolicy::fixed(2),
            SizePolicy::expanding(1),
            SizePolicy::expanding(3),
        ];
        assert_eq!(
            solve(&children, 20),
            LayoutOutcome::Allocated(vec![2, 4, 14])
        );
    }

    #[test]
    fn test_mandatory_overrun_is_too_small() {
        let children = [SizePolicy::fixed(50)];
        assert_eq!(solve(&children, 10), LayoutOutcome::TooSmall);
    }

    #[test]
    fn test_min_above_budget_is_too_small() {
        let child = SizePolicy::new(Policy::Minimum, 1, 12, 12, UNBOUNDED).unwrap();
        assert_eq!(solve(&[child], 10), LayoutOutcome::TooSmall);
    }

    #[test]
    fn test_ignored_takes_stretch_share_of_original_budget() {
        let children = [SizePolicy::ignored(1), SizePolicy::expanding(3)];
        // Ignored: 20 * 1/4 = 5. Expanding then absorbs the remaining 15.
        assert_eq!(
            solve(&children, 20),
            LayoutOutcome::Allocated(vec![5, 15])
        );
    }

    #[test]
    fn test_ignored_share_clamped_to_bounds() {
        let ignored = SizePolicy::ignored(1).with_range(8, 10).unwrap();
        let children = [ignored, SizePolicy::expanding(3)];
        // Raw share 20 * 1/4 = 5 clamps up to min 8.
        assert_eq!(
            solve(&children, 20),
            LayoutOutcome::Allocated(vec![8, 12])
        );
    }

    #[test]
    fn test_hint_tier_then_deficit_shrinks() {
        // Hints sum to 30 against a budget of 24; the preferred member
        // shrinks (inverse-stretch, group one) before the expander.
        let children = [
            SizePolicy::new(Policy::Preferred, 1, 15, 5, UNBOUNDED).unwrap(),
            SizePolicy::new(Policy::Expanding, 1, 15, 5, UNBOUNDED).unwrap(),
        ];
        assert_eq!(
            solve(&children, 24),
            LayoutOutcome::Allocated(vec![9, 15])
        );
    }

    #[test]
    fn test_deficit_below_minimums_is_too_small() {
        // Hints at minimums: nothing can shrink, so any hint overrun fails.
        let children = [
            SizePolicy::new(Policy::Preferred, 1, 8, 8, UNBOUNDED).unwrap(),
            SizePolicy::new(Policy::Expanding, 1, 8, 8, UNBOUNDED).unwrap(),
        ];
        assert_eq!(solve(&children, 10), LayoutOutcome::TooSmall);
    }

    #[test]
    fn test_conservation_on_success() {
        let children = [
            SizePolicy::fixed(3),
            SizePolicy::preferred(5),
            SizePolicy::expanding(2),
            SizePolicy::minimum(4),
        ];
        let LayoutOutcome::Allocated(extents) = solve(&children, 40) else {
            panic!("expected allocation");
        };
        assert_eq!(extents.len(), 4);
        assert_eq!(extents.iter().sum::<u16>(), 40);
        for (extent, child) in extents.iter().zip(children.iter()) {
            assert!(*extent >= child.min() && *extent <= child.max());
        }
    }

    #[test]
    fn test_order_preserved() {
        // Same policies, distinct hints: result[n] must match child[n].
        let children = [
            SizePolicy::fixed(1),
            SizePolicy::fixed(2),
            SizePolicy::fixed(3),
        ];
        assert_eq!(
            solve(&children, 10),
            LayoutOutcome::Allocated(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_deterministic() {
        let children = [
            SizePolicy::expanding(2),
            SizePolicy::preferred(7),
            SizePolicy::expanding(5),
        ];
        let first = solve(&children, 53);
        for _ in 0..10 {
            assert_eq!(solve(&children, 53), first);
        }
    }
}
