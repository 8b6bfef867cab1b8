//! Size policy - per-axis sizing behavior for one widget.
//!
//! A `SizePolicy` tells the layout engine how a widget wants to be sized
//! along a single axis: a categorical policy, a stretch weight for
//! proportional splits, a target hint, and hard min/max bounds.
//!
//! Policies are plain data. The engine reads them at pass start and never
//! writes them back; widgets own their policies for their entire lifetime.

use thiserror::Error;

/// Unbounded maximum extent.
pub const UNBOUNDED: u16 = u16::MAX;

// =============================================================================
// Policy
// =============================================================================

/// Categorical sizing behavior for one axis.
///
/// The solver resolves policies in priority tiers: mandatory policies are
/// paid first and never shrink, elastic policies compete for whatever is
/// left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Exactly `hint`, always.
    Fixed,
    /// At least `hint`; may grow, never shrinks below it.
    Minimum,
    /// At least `hint`, and actively claims surplus with the expanding group.
    MinimumExpanding,
    /// At most `hint`; gives space up willingly.
    Maximum,
    /// `hint` when possible, flexes both ways.
    #[default]
    Preferred,
    /// `hint` as a baseline, claims surplus aggressively.
    Expanding,
    /// Hint is ignored entirely; sized purely by stretch and bounds.
    Ignored,
}

impl Policy {
    /// Mandatory policies receive exactly their hint before anything else.
    #[inline]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Policy::Fixed | Policy::Minimum | Policy::MinimumExpanding)
    }
}

// =============================================================================
// SizePolicy
// =============================================================================

/// Sizing constraints for one widget along one axis.
///
/// Invariant: `min <= hint <= max`. Enforced at construction; fields are
/// private so a policy can never be observed in a broken state.
///
/// # Example
///
/// ```
/// use ember_tui::geometry::SizePolicy;
///
/// let status_bar = SizePolicy::fixed(1);
/// let editor = SizePolicy::expanding(3);
/// assert_eq!(status_bar.hint(), 1);
/// assert_eq!(editor.stretch(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePolicy {
    policy: Policy,
    stretch: u16,
    hint: u16,
    min: u16,
    max: u16,
}

/// A `SizePolicy` that violates its own bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    /// `min` exceeds `max`; no extent can satisfy both.
    #[error("minimum extent {min} exceeds maximum extent {max}")]
    MinAboveMax { min: u16, max: u16 },
    /// `hint` falls outside `[min, max]`.
    #[error("size hint {hint} outside bounds [{min}, {max}]")]
    HintOutOfBounds { hint: u16, min: u16, max: u16 },
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self {
            policy: Policy::Preferred,
            stretch: 1,
            hint: 0,
            min: 0,
            max: UNBOUNDED,
        }
    }
}

impl SizePolicy {
    /// Fully specified policy, validated.
    pub const fn new(
        policy: Policy,
        stretch: u16,
        hint: u16,
        min: u16,
        max: u16,
    ) -> Result<Self, PolicyError> {
        if min > max {
            return Err(PolicyError::MinAboveMax { min, max });
        }
        if hint < min || hint > max {
            return Err(PolicyError::HintOutOfBounds { hint, min, max });
        }
        Ok(Self {
            policy,
            stretch,
            hint,
            min,
            max,
        })
    }

    /// Exactly `hint` cells, no flex at all.
    pub const fn fixed(hint: u16) -> Self {
        Self {
            policy: Policy::Fixed,
            stretch: 1,
            hint,
            min: 0,
            max: UNBOUNDED,
        }
    }

    /// At least `hint` cells.
    pub const fn minimum(hint: u16) -> Self {
        Self {
            policy: Policy::Minimum,
            stretch: 1,
            hint,
            min: 0,
            max: UNBOUNDED,
        }
    }

    /// At least `hint` cells, competing for surplus with the expanders.
    pub const fn minimum_expanding(hint: u16) -> Self {
        Self {
            policy: Policy::MinimumExpanding,
            stretch: 1,
            hint,
            min: 0,
            max: UNBOUNDED,
        }
    }

    /// At most `hint` cells.
    pub const fn maximum(hint: u16) -> Self {
        Self {
            policy: Policy::Maximum,
            stretch: 1,
            hint,
            min: 0,
            max: hint,
        }
    }

    /// `hint` cells when available, flexes both ways.
    pub const fn preferred(hint: u16) -> Self {
        Self {
            policy: Policy::Preferred,
            stretch: 1,
            hint,
            min: 0,
            max: UNBOUNDED,
        }
    }

    /// Surplus-hungry policy with the given stretch weight.
    pub const fn expanding(stretch: u16) -> Self {
        Self {
            policy: Policy::Expanding,
            stretch,
            hint: 0,
            min: 0,
            max: UNBOUNDED,
        }
    }

    /// Sized purely by stretch weight and bounds; the hint plays no part.
    pub const fn ignored(stretch: u16) -> Self {
        Self {
            policy: Policy::Ignored,
            stretch,
            hint: 0,
            min: 0,
            max: UNBOUNDED,
        }
    }

    /// Replace the stretch weight.
    pub const fn with_stretch(mut self, stretch: u16) -> Self {
        self.stretch = stretch;
        self
    }

    /// Replace the min/max bounds, clamping the hint into the new range.
    pub const fn with_range(mut self, min: u16, max: u16) -> Result<Self, PolicyError> {
        if min > max {
            return Err(PolicyError::MinAboveMax { min, max });
        }
        self.min = min;
        self.max = max;
        if self.hint < min {
            self.hint = min;
        } else if self.hint > max {
            self.hint = max;
        }
        Ok(self)
    }

    #[inline]
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    #[inline]
    pub const fn stretch(&self) -> u16 {
        self.stretch
    }

    #[inline]
    pub const fn hint(&self) -> u16 {
        self.hint
    }

    #[inline]
    pub const fn min(&self) -> u16 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Clamp an extent into this policy's `[min, max]`.
    #[inline]
    pub const fn clamp(&self, extent: u16) -> u16 {
        if extent < self.min {
            self.min
        } else if extent > self.max {
            self.max
        } else {
            extent
        }
    }
}
