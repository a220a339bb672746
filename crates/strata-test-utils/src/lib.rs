//! Test utilities for Strata container development.
//!
//! Provides element types that make lifetime bugs observable:
//!
//! - [`DropLedger`] / [`Tracked`]: count how many values were created
//!   and dropped, so tests can assert "each element dropped exactly once".
//!   [`DropLedger::track_armed`] yields a value whose destructor panics
//!   after it is counted.
//! - [`CloneBudget`] / [`Fragile`]: a `Clone` that panics once a shared
//!   budget is spent, for exercising panic safety mid-copy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

// ── DropLedger ─────────────────────────────────────────────────

/// Shared counters of created and dropped [`Tracked`] values.
///
/// Cloning the ledger shares the counters.
#[derive(Clone, Default)]
pub struct DropLedger {
    created: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its creation and drop are recorded here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.record(value, false)
    }

    /// Like [`track`](Self::track), but dropping the value panics once
    /// the drop has been counted. Clones are not armed.
    pub fn track_armed<T>(&self, value: T) -> Tracked<T> {
        self.record(value, true)
    }

    fn record<T>(&self, value: T, armed: bool) -> Tracked<T> {
        self.created.set(self.created.get() + 1);
        Tracked {
            value,
            ledger: self.clone(),
            armed,
        }
    }

    /// Values created so far, through `track` or `Clone`.
    pub fn created(&self) -> usize {
        self.created.get()
    }

    /// Values dropped so far.
    pub fn drops(&self) -> usize {
        self.dropped.get()
    }

    /// Values created and not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.drops()
    }
}

/// A value whose lifetime is recorded in a [`DropLedger`].
pub struct Tracked<T> {
    value: T,
    ledger: DropLedger,
    armed: bool,
}

impl<T> Tracked<T> {
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        // Clone the payload first: if it panics, nothing is recorded.
        let value = self.value.clone();
        self.ledger.track(value)
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        let dropped = &self.ledger.dropped;
        dropped.set(dropped.get() + 1);
        if self.armed && !std::thread::panicking() {
            panic!("armed value dropped");
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tracked<T> {}

impl<T: PartialOrd> PartialOrd for Tracked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Tracked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// ── CloneBudget ────────────────────────────────────────────────

/// Number of clones [`Fragile`] values may still perform, shared
/// between every value wrapped by the same budget.
#[derive(Clone)]
pub struct CloneBudget {
    remaining: Rc<Cell<usize>>,
}

impl CloneBudget {
    /// A budget allowing `clones` successful clones in total.
    pub fn new(clones: usize) -> Self {
        Self {
            remaining: Rc::new(Cell::new(clones)),
        }
    }

    pub fn wrap<T>(&self, value: T) -> Fragile<T> {
        Fragile {
            value,
            budget: self.clone(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }
}

/// A value whose `Clone` panics once its [`CloneBudget`] is spent.
pub struct Fragile<T> {
    value: T,
    budget: CloneBudget,
}

impl<T: Clone> Clone for Fragile<T> {
    fn clone(&self) -> Self {
        let remaining = self.budget.remaining.get();
        if remaining == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.remaining.set(remaining - 1);
        self.budget.wrap(self.value.clone())
    }
}

impl<T> Deref for Fragile<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Fragile<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fragile").field(&self.value).finish()
    }
}

impl<T: PartialEq> PartialEq for Fragile<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn ledger_counts_creation_clone_and_drop() {
        let ledger = DropLedger::new();
        let a = ledger.track(1);
        let b = a.clone();
        assert_eq!(ledger.created(), 2);
        drop(a);
        assert_eq!(ledger.drops(), 1);
        assert_eq!(ledger.live(), 1);
        drop(b);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn armed_value_panics_after_counting() {
        let ledger = DropLedger::new();
        let armed = ledger.track_armed(1);
        let copy = armed.clone();
        let result = catch_unwind(AssertUnwindSafe(|| drop(armed)));
        assert!(result.is_err());
        assert_eq!(ledger.drops(), 1);
        drop(copy);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn budget_panics_when_spent() {
        let budget = CloneBudget::new(1);
        let v = budget.wrap(5);
        let copy = v.clone();
        assert_eq!(*copy, 5);
        assert_eq!(budget.remaining(), 0);
        let result = catch_unwind(AssertUnwindSafe(|| v.clone()));
        assert!(result.is_err());
    }

    #[test]
    fn failed_clone_is_not_counted() {
        let ledger = DropLedger::new();
        let budget = CloneBudget::new(0);
        let v = ledger.track(budget.wrap(1));
        let result = catch_unwind(AssertUnwindSafe(|| v.clone()));
        assert!(result.is_err());
        assert_eq!(ledger.created(), 1);
    }
}
