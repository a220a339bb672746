//! Growth policy configuration.

use crate::error::PolicyError;

/// Sizing rules for implicit buffer growth.
///
/// Controls the capacity a fresh container starts with and how fast the
/// buffer grows when an append, insert, or resize runs out of room.
/// Validated when a container is built from it; a container never
/// changes its policy afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    /// Capacity reserved by a default-constructed container, and the
    /// floor for every implicit growth step.
    ///
    /// Default: 4. Zero is allowed and defers the first allocation to
    /// the first insertion.
    pub initial_capacity: usize,

    /// Multiplier applied to the current capacity on implicit growth,
    /// in percent.
    ///
    /// Default: 200 (doubling). Must be at least 150 so that N appends
    /// relocate O(N) elements in total.
    pub factor_percent: u32,
}

impl GrowthPolicy {
    /// Default capacity of a freshly constructed container.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

    /// Default growth factor: doubling.
    pub const DEFAULT_FACTOR_PERCENT: u32 = 200;

    /// Smallest factor that still amortizes reallocation to O(1) per append.
    pub const MIN_FACTOR_PERCENT: u32 = 150;

    /// The default policy: initial capacity 4, doubling on growth.
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            factor_percent: Self::DEFAULT_FACTOR_PERCENT,
        }
    }

    /// Check the policy invariants.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.factor_percent < Self::MIN_FACTOR_PERCENT {
            return Err(PolicyError::FactorTooSmall {
                factor_percent: self.factor_percent,
            });
        }
        Ok(())
    }

    /// Capacity to allocate when `needed` slots are required and the
    /// buffer currently holds `current`.
    ///
    /// Returns `max(current × factor, needed, initial_capacity)`. If the
    /// scaled capacity overflows, falls back to an exact fit of `needed`.
    pub fn grow(&self, current: usize, needed: usize) -> usize {
        self.scale(current)
            .unwrap_or(needed)
            .max(needed)
            .max(self.initial_capacity)
    }

    /// Capacity for a container constructed with `len` elements.
    ///
    /// Reserves headroom (`len × factor`) so the next append does not
    /// reallocate immediately, and never less than `initial_capacity`.
    pub fn headroom(&self, len: usize) -> usize {
        self.scale(len).unwrap_or(len).max(self.initial_capacity)
    }

    fn scale(&self, n: usize) -> Option<usize> {
        let scaled = n as u128 * u128::from(self.factor_percent) / 100;
        usize::try_from(scaled).ok()
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_constants() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.initial_capacity, 4);
        assert_eq!(policy.factor_percent, 200);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn factor_below_minimum_rejected() {
        let policy = GrowthPolicy {
            initial_capacity: 4,
            factor_percent: 120,
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::FactorTooSmall { factor_percent: 120 })
        );
    }

    #[test]
    fn grow_from_empty_uses_initial_capacity() {
        let policy = GrowthPolicy::new();
        assert_eq!(policy.grow(0, 1), 4);
    }

    #[test]
    fn grow_doubles() {
        let policy = GrowthPolicy::new();
        assert_eq!(policy.grow(4, 5), 8);
        assert_eq!(policy.grow(8, 9), 16);
    }

    #[test]
    fn grow_honours_large_request() {
        let policy = GrowthPolicy::new();
        assert_eq!(policy.grow(4, 100), 100);
    }

    #[test]
    fn grow_overflow_falls_back_to_exact_fit() {
        let policy = GrowthPolicy::new();
        assert_eq!(policy.grow(usize::MAX - 1, usize::MAX), usize::MAX);
    }

    #[test]
    fn headroom_reserves_factor() {
        let policy = GrowthPolicy::new();
        assert_eq!(policy.headroom(0), 4);
        assert_eq!(policy.headroom(1), 4);
        assert_eq!(policy.headroom(10), 20);
    }

    #[test]
    fn one_and_a_half_still_makes_progress() {
        let policy = GrowthPolicy {
            initial_capacity: 0,
            factor_percent: 150,
        };
        // 1 × 1.5 truncates to 1; `needed` keeps growth moving.
        assert_eq!(policy.grow(1, 2), 2);
        assert_eq!(policy.grow(10, 11), 15);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn grow_covers_needed(
                current in 0usize..1_000_000,
                extra in 1usize..1_000,
                factor in 150u32..400,
            ) {
                let policy = GrowthPolicy { initial_capacity: 4, factor_percent: factor };
                let needed = current + extra;
                prop_assert!(policy.grow(current, needed) >= needed);
            }

            #[test]
            fn grow_is_geometric(current in 4usize..1_000_000, factor in 150u32..400) {
                let policy = GrowthPolicy { initial_capacity: 4, factor_percent: factor };
                let grown = policy.grow(current, current + 1);
                prop_assert!(grown as u128 * 100 >= current as u128 * u128::from(factor) - 100);
            }
        }
    }
}
