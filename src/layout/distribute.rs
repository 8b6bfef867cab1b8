//! Space distributor - spends surplus cells after the mandatory tiers.
//!
//! Two groups compete in order: first {Expanding, MinimumExpanding}, then
//! {Preferred, Minimum, Ignored}. Within a group members are resolved in
//! child order with sequential consumption: each takes
//! `remaining_surplus * stretch / remaining_group_stretch`, so the group
//! absorbs its surplus exactly whenever nobody hits a bound.
//!
//! A share that would push a member past its `max` pins the member at
//! `max`, returns the overflow to the pool, and restarts the scan over the
//! reduced member list. After both groups a single-unit correction pass
//! places whatever the caps left over, one cell at a time, until every
//! member is pinned or the surplus is gone. Surplus that cannot be placed
//! is returned unspent; that is documented behavior, not an error.

use crate::geometry::{Policy, SizePolicy};

/// First grow group: policies that actively claim surplus.
fn grows_first(policy: Policy) -> bool {
    matches!(policy, Policy::Expanding | Policy::MinimumExpanding)
}

/// Second grow group: policies that accept surplus once the first group
/// is satisfied.
fn grows_second(policy: Policy) -> bool {
    matches!(
        policy,
        Policy::Preferred | Policy::Minimum | Policy::Ignored
    )
}

/// Spread `surplus` cells over `extents`, returning the unplaced remainder.
///
/// `extents[i]` must already hold child `i`'s tier allocation and must not
/// exceed `children[i].max()`.
pub(crate) fn distribute(children: &[SizePolicy], extents: &mut [u16], surplus: u16) -> u16 {
    let group_one: Vec<usize> = (0..children.len())
        .filter(|&i| grows_first(children[i].policy()))
        .collect();
    let group_two: Vec<usize> = (0..children.len())
        .filter(|&i| grows_second(children[i].policy()))
        .collect();

    let mut surplus = grow_group(children, extents, &group_one, surplus);
    if surplus > 0 {
        surplus = grow_group(children, extents, &group_two, surplus);
    }

    // Rounding / cap leftovers: one cell at a time, first group first.
    if surplus > 0 {
        surplus = place_single_units(children, extents, &group_one, surplus);
    }
    if surplus > 0 {
        surplus = place_single_units(children, extents, &group_two, surplus);
    }
    surplus
}

/// Grow one group proportionally to stretch, restarting whenever a member
/// pins at its `max`. Returns the surplus the group could not absorb.
fn grow_group(
    children: &[SizePolicy],
    extents: &mut [u16],
    members: &[usize],
    mut surplus: u16,
) -> u16 {
    let mut active: Vec<usize> = members.to_vec();
    loop {
        if active.is_empty() || surplus == 0 {
            return surplus;
        }
        let total: u32 = active.iter().map(|&i| children[i].stretch() as u32).sum();
        assert!(
            total > 0,
            "proportional split over a group with zero total stretch"
        );

        // Trial scan: sequential shares, watching for a max overrun.
        let mut pool = surplus as u32;
        let mut stretch_left = total;
        let mut shares: Vec<u16> = Vec::with_capacity(active.len());
        let mut pinned: Option<usize> = None;
        for &i in &active {
            let stretch = children[i].stretch() as u32;
            // Zero-stretch members behind the last weighted one take no share.
            let share = if stretch_left == 0 {
                0
            } else {
                pool * stretch / stretch_left
            };
            if extents[i] as u32 + share > children[i].max() as u32 {
                pinned = Some(i);
                break;
            }
            shares.push(share as u16);
            pool -= share;
            stretch_left -= stretch;
        }

        match pinned {
            Some(i) => {
                // Cap at max, return the overflow to the pool, drop the
                // member, and rescan the reduced group.
                let headroom = children[i].max() - extents[i];
                extents[i] = children[i].max();
                surplus -= headroom;
                active.retain(|&j| j != i);
            }
            None => {
                for (k, &i) in active.iter().enumerate() {
                    extents[i] += shares[k];
                    surplus -= shares[k];
                }
                return surplus;
            }
        }
    }
}

/// Repeated in-order scans handing out one cell per member with headroom,
/// until a full scan places nothing or the surplus is exhausted.
fn place_single_units(
    children: &[SizePolicy],
    extents: &mut [u16],
    members: &[usize],
    mut surplus: u16,
) -> u16 {
    loop {
        let mut placed = false;
        for &i in members {
            if surplus == 0 {
                return 0;
            }
            if extents[i] < children[i].max() {
                extents[i] += 1;
                surplus -= 1;
                placed = true;
            }
        }
        if !placed {
            return surplus;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SizePolicy;

    #[test]
    fn test_expanding_split_consumes_surplus_exactly() {
        // The 1:3 split from a surplus of 18: sequential consumption gives
        // 4 then 14, no remainder.
        let children = [SizePolicy::expanding(1), SizePolicy::expanding(3)];
        let mut extents = [0u16, 0];
        let leftover = distribute(&children, &mut extents, 18);
        assert_eq!(extents, [4, 14]);
        assert_eq!(leftover, 0);
    }

    #[test]
    fn test_max_cap_redistributes_overflow() {
        let capped = SizePolicy::expanding(1).with_range(0, 3).unwrap();
        let children = [capped, SizePolicy::expanding(1)];
        let mut extents = [0u16, 0];
        let leftover = distribute(&children, &mut extents, 10);
        assert_eq!(extents, [3, 7]);
        assert_eq!(leftover, 0);
    }

    #[test]
    fn test_leftover_rolls_into_second_group() {
        let expanding = SizePolicy::expanding(1).with_range(0, 4).unwrap();
        let children = [expanding, SizePolicy::preferred(0)];
        let mut extents = [0u16, 0];
        let leftover = distribute(&children, &mut extents, 10);
        assert_eq!(extents, [4, 6]);
        assert_eq!(leftover, 0);
    }

    #[test]
    fn test_all_pinned_leaves_surplus_unspent() {
        let a = SizePolicy::expanding(1).with_range(0, 2).unwrap();
        let b = SizePolicy::preferred(0).with_range(0, 3).unwrap();
        let children = [a, b];
        let mut extents = [0u16, 0];
        let leftover = distribute(&children, &mut extents, 10);
        assert_eq!(extents, [2, 3]);
        assert_eq!(leftover, 5);
    }

    #[test]
    fn test_single_unit_pass_favors_first_group_in_order() {
        // Three stretch-1 expanders, surplus 7: 2/2/3 by sequential split
        // (7*1/3=2, 5*1/2=2, 3*1/1=3).
        let children = [
            SizePolicy::expanding(1),
            SizePolicy::expanding(1),
            SizePolicy::expanding(1),
        ];
        let mut extents = [0u16, 0, 0];
        let leftover = distribute(&children, &mut extents, 7);
        assert_eq!(extents.iter().sum::<u16>(), 7);
        assert_eq!(extents, [2, 2, 3]);
        assert_eq!(leftover, 0);
    }

    #[test]
    fn test_monotonic_stretch_priority() {
        // Raising one expander's stretch never shrinks its share and never
        // grows a preferred sibling's.
        let preferred = SizePolicy::preferred(0);
        let mut previous_expander = 0u16;
        for stretch in 1..6u16 {
            let children = [
                SizePolicy::expanding(stretch),
                SizePolicy::expanding(1),
                preferred,
            ];
            let mut extents = [0u16, 0, 0];
            distribute(&children, &mut extents, 30);
            assert!(extents[0] >= previous_expander);
            assert_eq!(extents[2], 0);
            previous_expander = extents[0];
        }
    }

    #[test]
    fn test_second_group_weighted_by_stretch() {
        let children = [
            SizePolicy::preferred(0).with_stretch(1),
            SizePolicy::preferred(0).with_stretch(4),
        ];
        let mut extents = [0u16, 0];
        let leftover = distribute(&children, &mut extents, 10);
        assert_eq!(extents, [2, 8]);
        assert_eq!(leftover, 0);
    }
}
