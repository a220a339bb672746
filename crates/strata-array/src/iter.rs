//! By-value iteration over a [`DynamicArray`](crate::DynamicArray).

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;

use crate::raw::RawBuf;

/// Owning iterator returned by `DynamicArray::into_iter`.
///
/// Takes over the array's buffer. Elements not consumed by the time the
/// iterator is dropped are dropped with it.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    /// Slots `[start, end)` are initialized and not yet yielded.
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` is the live window.
        unsafe { self.buf.assume_init(self.start..self.end) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let index = self.start;
        self.start += 1;
        // SAFETY: `index` was inside the live window and is now outside it.
        Some(unsafe { self.buf.read(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was the last live slot and is now outside the window.
        Some(unsafe { self.buf.read(self.end) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let live = self.start..self.end;
        self.start = self.end;
        // SAFETY: `live` was the initialized window; it is emptied above
        // so nothing observes those slots again.
        unsafe { self.buf.drop_range(live) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;
    use strata_test_utils::DropLedger;

    #[test]
    fn yields_in_order_from_both_ends() {
        let arr: DynamicArray<i32> = (1..=5).collect();
        let mut it = arr.into_iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(5));
        assert_eq!(it.as_slice(), &[2, 3, 4]);
        assert_eq!(it.collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn unconsumed_elements_dropped_once() {
        let ledger = DropLedger::new();
        let arr: DynamicArray<_> = (0..6).map(|i| ledger.track(i)).collect();
        let mut it = arr.into_iter();
        let first = it.next().unwrap();
        drop(it);
        assert_eq!(ledger.drops(), 5);
        drop(first);
        assert_eq!(ledger.drops(), 6);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let arr: DynamicArray<u8> = DynamicArray::from([7u8]);
        let mut it = arr.into_iter();
        assert_eq!(it.next(), Some(7));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }
}
