//! Generation-tagged positions into a [`DynamicArray`](crate::DynamicArray).
//!
//! A [`Cursor`] is the array's equivalent of a random-access iterator
//! used as a position argument. Unlike a borrowed slice iterator it does
//! not hold the array borrowed, so it can outlive a mutation. It records
//! the container it came from and the container's generation at the time
//! it was taken; presenting it back after a restructuring mutation fails
//! fast with `InvalidIterator` instead of silently addressing a moved
//! element.

use std::fmt;

use strata_core::{ContainerId, Generation};

/// A position in `[0, len]` of a specific array at a specific generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Cursor {
    pub(crate) container: ContainerId,
    pub(crate) generation: Generation,
    pub(crate) index: usize,
}

impl Cursor {
    pub(crate) fn new(container: ContainerId, generation: Generation, index: usize) -> Self {
        Self {
            container,
            generation,
            index,
        }
    }

    /// Element index this cursor addresses.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Container the cursor was taken from.
    pub fn container(&self) -> ContainerId {
        self.container
    }

    /// Generation of the container when the cursor was taken.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The cursor `n` positions further on, or `None` on overflow.
    ///
    /// Bounds are checked when the cursor is resolved, not here.
    pub fn advance(self, n: usize) -> Option<Self> {
        let index = self.index.checked_add(n)?;
        Some(Self { index, ..self })
    }

    /// The cursor `n` positions back, or `None` before index 0.
    pub fn retreat(self, n: usize) -> Option<Self> {
        let index = self.index.checked_sub(n)?;
        Some(Self { index, ..self })
    }

    /// Signed distance from `self` to `other`, if both come from the
    /// same container and generation.
    pub fn distance_to(&self, other: &Cursor) -> Option<isize> {
        if self.container != other.container || self.generation != other.generation {
            return None;
        }
        let to = isize::try_from(other.index).ok()?;
        let from = isize::try_from(self.index).ok()?;
        to.checked_sub(from)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cursor(container={}, gen={}, index={})",
            self.container, self.generation, self.index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_and_retreat() {
        let c = Cursor::new(ContainerId::next(), Generation(3), 2);
        assert_eq!(c.advance(3).unwrap().index(), 5);
        assert_eq!(c.retreat(2).unwrap().index(), 0);
        assert!(c.retreat(3).is_none());
        assert_eq!(c.advance(1).unwrap().generation(), Generation(3));
    }

    #[test]
    fn distance_requires_same_origin() {
        let id = ContainerId::next();
        let a = Cursor::new(id, Generation(0), 1);
        let b = Cursor::new(id, Generation(0), 4);
        assert_eq!(a.distance_to(&b), Some(3));
        assert_eq!(b.distance_to(&a), Some(-3));

        let stale = Cursor::new(id, Generation(1), 4);
        assert_eq!(a.distance_to(&stale), None);

        let foreign = Cursor::new(ContainerId::next(), Generation(0), 4);
        assert_eq!(a.distance_to(&foreign), None);
    }
}
