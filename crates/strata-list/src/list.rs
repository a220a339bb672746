//! The linked list and its iterators.

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use strata_core::ContainerError;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Owning link to the next node. Every node is allocated by
/// [`LinkedList::alloc`] and reclaimed exactly once, when it is unlinked.
type Link<T> = Option<NonNull<Node<T>>>;

/// A singly linked list with O(1) insertion at both ends.
///
/// See the [crate documentation](crate) for the full contract.
pub struct LinkedList<T> {
    head: Link<T>,
    /// Last node of the chain; non-owning.
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list owns its nodes exactly as a chain of `Box`es would,
// so it may cross threads whenever `T` may.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Create an empty list. Does not allocate.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` before the first element. O(1).
    pub fn push_front(&mut self, value: T) {
        let node = Self::alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Insert `value` after the last element. O(1).
    pub fn push_back(&mut self, value: T) {
        let node = Self::alloc(value, None);
        match self.tail {
            // SAFETY: `tail` is a live node of this list and `&mut self`
            // guarantees nothing else is borrowing it.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Remove and return the first element. O(1).
    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        let head = self.head.ok_or(ContainerError::EmptyContainer)?;
        // SAFETY: `head` is a live node; it is unlinked below, so it is
        // reclaimed exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Remove and return the last element. O(n).
    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        if self.len <= 1 {
            return self.pop_front();
        }
        let prev = self
            .node_at(self.len - 2)
            .ok_or(ContainerError::EmptyContainer)?;
        // SAFETY: `prev` is live and its successor is the tail, which is
        // unlinked here and reclaimed exactly once.
        let node = unsafe {
            let last = (*prev.as_ptr())
                .next
                .take()
                .ok_or(ContainerError::EmptyContainer)?;
            Box::from_raw(last.as_ptr())
        };
        self.tail = Some(prev);
        self.len -= 1;
        Ok(node.value)
    }

    /// The first element; `EmptyContainer` when empty.
    pub fn front(&self) -> Result<&T, ContainerError> {
        // SAFETY: live node, borrowed for no longer than `&self`.
        self.head
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(ContainerError::EmptyContainer)
    }

    /// The first element, mutably; `EmptyContainer` when empty.
    pub fn front_mut(&mut self) -> Result<&mut T, ContainerError> {
        // SAFETY: live node, uniquely borrowed through `&mut self`.
        self.head
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(ContainerError::EmptyContainer)
    }

    /// The last element; `EmptyContainer` when empty.
    pub fn back(&self) -> Result<&T, ContainerError> {
        // SAFETY: live node, borrowed for no longer than `&self`.
        self.tail
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(ContainerError::EmptyContainer)
    }

    /// The last element, mutably; `EmptyContainer` when empty.
    pub fn back_mut(&mut self) -> Result<&mut T, ContainerError> {
        // SAFETY: live node, uniquely borrowed through `&mut self`.
        self.tail
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(ContainerError::EmptyContainer)
    }

    /// The element at `index`; `OutOfRange` when `index >= len`. O(index).
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        let node = self.checked_node(index)?;
        // SAFETY: live node, borrowed for no longer than `&self`.
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// The element at `index`, mutably. O(index).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let node = self.checked_node(index)?;
        // SAFETY: live node, uniquely borrowed through `&mut self`.
        Ok(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Insert `value` so that it ends up at `index`. O(index).
    ///
    /// `index == len` appends; `OutOfRange` when `index > len`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        if index > self.len {
            return Err(ContainerError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        let prev = self.checked_node(index - 1)?;
        // SAFETY: `prev` is a live interior node; the new node takes over
        // its successor link.
        unsafe {
            let node = Self::alloc(value, (*prev.as_ptr()).next);
            (*prev.as_ptr()).next = Some(node);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`. O(index).
    pub fn remove_at(&mut self, index: usize) -> Result<T, ContainerError> {
        if index == 0 {
            return self.pop_front();
        }
        let prev = self.checked_node(index - 1)?;
        // SAFETY: `prev` is live; its successor is unlinked here and
        // reclaimed exactly once.
        let node = unsafe {
            let target = (*prev.as_ptr()).next.ok_or(ContainerError::OutOfRange {
                index,
                len: self.len,
            })?;
            let node = Box::from_raw(target.as_ptr());
            (*prev.as_ptr()).next = node.next;
            node
        };
        if node.next.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Drop every element, front to back.
    ///
    /// If an element's destructor panics, the remaining nodes are still
    /// released before the panic propagates.
    pub fn clear(&mut self) {
        struct DropGuard<'a, T>(&'a mut LinkedList<T>);

        impl<T> Drop for DropGuard<'_, T> {
            fn drop(&mut self) {
                while self.0.pop_front().is_ok() {}
            }
        }

        while let Ok(value) = self.pop_front() {
            let guard = DropGuard(self);
            drop(value);
            mem::forget(guard);
        }
    }

    /// Whether any element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Iterator over shared references, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Iterator over mutable references, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    fn node_at(&self, index: usize) -> Link<T> {
        let mut cur = self.head;
        for _ in 0..index {
            // SAFETY: every link reachable from `head` is a live node.
            cur = unsafe { (*cur?.as_ptr()).next };
        }
        cur
    }

    fn checked_node(&self, index: usize) -> Result<NonNull<Node<T>>, ContainerError> {
        let out_of_range = ContainerError::OutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        self.node_at(index).ok_or(out_of_range)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// ── Iterators ──────────────────────────────────────────────────

/// Borrowing iterator over a [`LinkedList`], front to back.
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.remaining -= 1;
        // SAFETY: the list is borrowed for `'a`, so the node stays live
        // and unaliased by any `&mut`.
        let node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

// SAFETY: `Iter` only hands out `&T`, like `&LinkedList<T>`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: as above.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a [`LinkedList`], front to back.
pub struct IterMut<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let node = self.next?;
        self.remaining -= 1;
        // SAFETY: the list is uniquely borrowed for `'a` and each node is
        // yielded once.
        let node = unsafe { &mut *node.as_ptr() };
        self.next = node.next;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

// SAFETY: `IterMut` behaves like `&mut LinkedList<T>`.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
// SAFETY: shared access to an `IterMut` exposes no element.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`LinkedList`], front to back.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
