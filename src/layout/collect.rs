//! Space collector - claws back cells when the tiers overspend the budget.
//!
//! Mirror of the distributor with shrink groups: first {Maximum, Preferred,
//! Ignored}, then {Expanding}. Shares are weighted by the *inverse* of
//! stretch, so low-stretch members give up proportionally more. The stretch
//! used is always the one for the axis being solved.
//!
//! Shrinking a member below its `min` instead clamps it at `min`, returns
//! the excess to the pool, drops the member, and restarts the scan over the
//! reduced list. A single-unit shrink pass then absorbs flooring residue,
//! so rounding alone never fails a layout that fits. Whatever deficit
//! survives both groups is returned to the caller, which declares the
//! container too small.

use crate::geometry::{Policy, SizePolicy};

/// First shrink group: policies that give space up willingly.
fn shrinks_first(policy: Policy) -> bool {
    matches!(
        policy,
        Policy::Maximum | Policy::Preferred | Policy::Ignored
    )
}

/// Second shrink group: expanders give space back only as a last resort.
fn shrinks_second(policy: Policy) -> bool {
    matches!(policy, Policy::Expanding)
}

/// Shrink `extents` by `deficit` cells, returning the unresolved remainder.
///
/// `extents[i]` must already hold child `i`'s tier allocation and must not
/// sit below `children[i].min()`.
pub(crate) fn collect(children: &[SizePolicy], extents: &mut [u16], deficit: u16) -> u16 {
    let group_one: Vec<usize> = (0..children.len())
        .filter(|&i| shrinks_first(children[i].policy()))
        .collect();
    let group_two: Vec<usize> = (0..children.len())
        .filter(|&i| shrinks_second(children[i].policy()))
        .collect();

    let mut deficit = shrink_group(children, extents, &group_one, deficit);
    if deficit > 0 {
        deficit = shrink_group(children, extents, &group_two, deficit);
    }

    // Flooring residue: one cell at a time, first group first.
    if deficit > 0 {
        deficit = take_single_units(children, extents, &group_one, deficit);
    }
    if deficit > 0 {
        deficit = take_single_units(children, extents, &group_two, deficit);
    }
    deficit
}

/// Shrink one group by inverse-stretch shares, restarting whenever a member
/// clamps at its `min`. Returns the deficit the group could not absorb.
fn shrink_group(
    children: &[SizePolicy],
    extents: &mut [u16],
    members: &[usize],
    mut deficit: u16,
) -> u16 {
    let mut active: Vec<usize> = members.to_vec();
    loop {
        if active.is_empty() || deficit == 0 {
            return deficit;
        }
        for &i in &active {
            assert!(
                children[i].stretch() > 0,
                "inverse-stretch shrink requires nonzero stretch"
            );
        }
        let total_inverse: f64 = active
            .iter()
            .map(|&i| 1.0 / children[i].stretch() as f64)
            .sum();

        // Trial scan: sequential inverse-weighted shares, watching for a
        // min underrun.
        let mut pool = deficit;
        let mut inverse_left = total_inverse;
        let mut shares: Vec<u16> = Vec::with_capacity(active.len());
        let mut clamped: Option<usize> = None;
        for &i in &active {
            let inverse = 1.0 / children[i].stretch() as f64;
            let share = ((pool as f64 * inverse / inverse_left) as u16).min(pool);
            if extents[i].saturating_sub(share) < children[i].min() {
                clamped = Some(i);
                break;
            }
            shares.push(share);
            pool -= share;
            inverse_left -= inverse;
        }

        match clamped {
            Some(i) => {
                // Clamp at min, return the excess to the pool, drop the
                // member, and rescan the reduced group.
                let slack = extents[i] - children[i].min();
                extents[i] = children[i].min();
                deficit -= slack;
                active.retain(|&j| j != i);
            }
            None => {
                for (k, &i) in active.iter().enumerate() {
                    extents[i] -= shares[k];
                    deficit -= shares[k];
                }
                return deficit;
            }
        }
    }
}

/// Repeated in-order scans taking one cell per member with slack above its
/// `min`, until a full scan takes nothing or the deficit is resolved.
fn take_single_units(
    children: &[SizePolicy],
    extents: &mut [u16],
    members: &[usize],
    mut deficit: u16,
) -> u16 {
    loop {
        let mut taken = false;
        for &i in members {
            if deficit == 0 {
                return 0;
            }
            if extents[i] > children[i].min() {
                extents[i] -= 1;
                deficit -= 1;
                taken = true;
            }
        }
        if !taken {
            return deficit;
        }
    }
}
