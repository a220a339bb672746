//! The growable contiguous array.
//!
//! [`DynamicArray`] owns a `RawBuf` of `capacity` slots, of which the
//! first `len` are live. All element-lifetime bookkeeping lives here:
//! `len` is always updated *before* any user code (`Clone`, `Default`,
//! `Drop`) that could panic runs, so an unwinding panic leaves the array
//! with exactly `[0, len)` live and nothing dropped twice.
//!
//! # Growth
//!
//! Implicit growth (append, insert, resize) follows the array's
//! [`GrowthPolicy`]: the new capacity is `max(capacity × factor, needed,
//! initial_capacity)`. Explicit [`reserve`](DynamicArray::reserve) and
//! [`squeeze`](DynamicArray::squeeze) allocate exactly what they are
//! asked for. Every relocation allocates the destination first, moves
//! the elements across, and only then releases the old block, so a
//! failed allocation leaves the array untouched.
//!
//! # Indexing
//!
//! `arr[i]` is always bounds-checked and panics when `i >= len`. Use
//! [`at`](DynamicArray::at) for a recoverable `OutOfRange` error.

#![allow(unsafe_code)]

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut, Range};

use smallvec::SmallVec;
use strata_core::{ContainerError, ContainerId, CursorFault, Generation, GrowthPolicy};

use crate::cursor::Cursor;
use crate::iter::IntoIter;
use crate::raw::RawBuf;

/// Values staged on the stack before a multi-element insert.
type Staged<T> = SmallVec<[T; 8]>;

/// A contiguous, growable sequence with value semantics.
///
/// See the [module documentation](crate::array) for the growth and safety
/// contract.
pub struct DynamicArray<T> {
    buf: RawBuf<T>,
    /// Number of live elements; slots `[0, len)` are initialized.
    len: usize,
    policy: GrowthPolicy,
    id: ContainerId,
    generation: Generation,
}

// ── Construction ───────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Create an empty array with the default capacity of 4.
    ///
    /// Aborts on out-of-memory; use [`try_new`](Self::try_new) to get an
    /// `AllocationFailure` instead.
    pub fn new() -> Self {
        let policy = GrowthPolicy::new();
        Self::from_parts(RawBuf::allocate(policy.initial_capacity), policy)
    }

    /// Create an empty array with the default capacity, reporting
    /// allocation failure.
    pub fn try_new() -> Result<Self, ContainerError> {
        Self::with_policy(GrowthPolicy::new())
    }

    /// Create an empty array with no allocation (`capacity == 0`).
    ///
    /// This is also the state [`take`](Self::take) leaves behind.
    pub fn empty() -> Self {
        Self::from_parts(RawBuf::empty(), GrowthPolicy::new())
    }

    /// Create an empty array governed by `policy`, reserving
    /// `policy.initial_capacity` slots.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, ContainerError> {
        policy.validate()?;
        let buf = RawBuf::try_allocate(policy.initial_capacity)?;
        Ok(Self::from_parts(buf, policy))
    }

    /// Create an empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        let buf = RawBuf::try_allocate(capacity)?;
        Ok(Self::from_parts(buf, GrowthPolicy::new()))
    }

    /// Create an array of `len` default values.
    ///
    /// Capacity is [`GrowthPolicy::headroom`] of `len`, so the next
    /// append does not reallocate.
    pub fn with_size(len: usize) -> Result<Self, ContainerError>
    where
        T: Default,
    {
        let mut arr = Self::with_headroom(len)?;
        arr.resize_with(len, T::default)?;
        Ok(arr)
    }

    /// Create an array of `len` clones of `value`.
    pub fn with_size_and_value(len: usize, value: &T) -> Result<Self, ContainerError>
    where
        T: Clone,
    {
        let mut arr = Self::with_headroom(len)?;
        arr.resize_with(len, || value.clone())?;
        Ok(arr)
    }

    /// Create an array from clones of `src[range]`, in order.
    ///
    /// Fails with `InvalidRange` if the range is inverted and with
    /// `OutOfRange` if it extends past the end of `src`.
    pub fn from_range(src: &[T], range: Range<usize>) -> Result<Self, ContainerError>
    where
        T: Clone,
    {
        let items = checked_subslice(src, range)?;
        let mut arr = Self::with_headroom(items.len())?;
        arr.extend_from_slice(items)?;
        Ok(arr)
    }

    /// Create an array from clones of the elements between two cursors
    /// of `src`.
    pub fn from_cursors(src: &Self, first: Cursor, last: Cursor) -> Result<Self, ContainerError>
    where
        T: Clone,
    {
        let start = src.resolve(first)?;
        let end = src.resolve(last)?;
        Self::from_range(src.as_slice(), start..end)
    }

    /// Deep copy with independent storage, reporting allocation failure.
    ///
    /// The copy keeps the source's capacity and growth policy and gets a
    /// fresh identity, so cursors into `self` are rejected by the copy.
    pub fn try_clone(&self) -> Result<Self, ContainerError>
    where
        T: Clone,
    {
        let buf = RawBuf::try_allocate(self.capacity())?;
        Ok(self.clone_into_buf(buf))
    }

    /// Move the contents out, leaving `self` empty with no allocation.
    ///
    /// O(1); never allocates, clones, or fails. The returned array keeps
    /// the identity, so outstanding cursors follow the elements.
    pub fn take(&mut self) -> Self {
        let vacant = Self::from_parts(RawBuf::empty(), self.policy);
        mem::replace(self, vacant)
    }

    fn from_parts(buf: RawBuf<T>, policy: GrowthPolicy) -> Self {
        Self {
            buf,
            len: 0,
            policy,
            id: ContainerId::next(),
            generation: Generation::default(),
        }
    }

    fn with_headroom(len: usize) -> Result<Self, ContainerError> {
        let policy = GrowthPolicy::new();
        let buf = RawBuf::try_allocate(policy.headroom(len))?;
        Ok(Self::from_parts(buf, policy))
    }

    fn clone_into_buf(&self, buf: RawBuf<T>) -> Self
    where
        T: Clone,
    {
        let mut out = Self::from_parts(buf, self.policy);
        for value in self.iter() {
            out.buf.write(out.len, value.clone());
            out.len += 1;
        }
        out
    }
}

// ── Capacity ───────────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Largest element count a buffer could ever be asked to hold.
    pub fn max_size(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// The growth policy this array was built with.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Identity used to validate cursors.
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Current restructuring generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Ensure `capacity >= new_capacity`, allocating exactly
    /// `new_capacity` slots if it has to grow.
    ///
    /// Invalidates all cursors when it reallocates. On error the array
    /// is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), ContainerError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let fresh = RawBuf::try_allocate(new_capacity)?;
        self.relocate(fresh);
        Ok(())
    }

    /// Shrink capacity to exactly `len`, releasing the allocation
    /// entirely when empty.
    ///
    /// Invalidates all cursors when it reallocates. On error the array
    /// is unchanged.
    pub fn squeeze(&mut self) -> Result<(), ContainerError> {
        if self.capacity() == self.len {
            return Ok(());
        }
        let fresh = if self.len == 0 {
            RawBuf::empty()
        } else {
            RawBuf::try_allocate(self.len)?
        };
        self.relocate(fresh);
        Ok(())
    }

    /// Resize to `new_len`, filling new slots with clones of `value`.
    ///
    /// Shrinking drops the trailing elements. Growing goes through the
    /// growth policy. If `Clone` panics part-way, the elements cloned so
    /// far remain in the array.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.grow_to(new_len)?;
        while self.len + 1 < new_len {
            self.buf.write(self.len, value.clone());
            self.len += 1;
        }
        self.buf.write(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Resize to `new_len`, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), ContainerError>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resize to `new_len`, filling new slots with values from `fill`.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F) -> Result<(), ContainerError>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.grow_to(new_len)?;
        while self.len < new_len {
            self.buf.write(self.len, fill());
            self.len += 1;
        }
        Ok(())
    }

    /// Drop every element past `new_len`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = mem::replace(&mut self.len, new_len);
        self.bump();
        // SAFETY: `[new_len, old_len)` was live and is now past `len`.
        unsafe { self.buf.drop_range(new_len..old_len) }
    }

    /// Drop every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Grow through the policy until `needed` slots fit.
    fn grow_to(&mut self, needed: usize) -> Result<(), ContainerError> {
        if needed <= self.capacity() {
            return Ok(());
        }
        let fresh = RawBuf::try_allocate(self.policy.grow(self.capacity(), needed))?;
        self.relocate(fresh);
        Ok(())
    }

    /// Room for `additional` more elements, through the policy.
    fn grow_by(&mut self, additional: usize) -> Result<(), ContainerError> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(ContainerError::AllocationFailure {
                requested: usize::MAX,
            })?;
        self.grow_to(needed)
    }

    /// Move the live elements into `fresh` and release the old block.
    fn relocate(&mut self, mut fresh: RawBuf<T>) {
        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity = fresh.capacity(),
            len = self.len,
            "relocating buffer"
        );
        self.buf.move_prefix_into(&mut fresh, self.len);
        self.buf = fresh;
        self.bump();
    }

    fn bump(&mut self) {
        self.generation = self.generation.next();
    }
}

// ── Element access ─────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Checked access; `OutOfRange` when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.as_slice().get(index).ok_or(ContainerError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Checked mutable access; `OutOfRange` when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ContainerError::OutOfRange { index, len })
    }

    /// The first element; `EmptyContainer` when empty.
    pub fn first(&self) -> Result<&T, ContainerError> {
        self.as_slice().first().ok_or(ContainerError::EmptyContainer)
    }

    /// The first element, mutably; `EmptyContainer` when empty.
    pub fn first_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(ContainerError::EmptyContainer)
    }

    /// The last element; `EmptyContainer` when empty.
    pub fn last(&self) -> Result<&T, ContainerError> {
        self.as_slice().last().ok_or(ContainerError::EmptyContainer)
    }

    /// The last element, mutably; `EmptyContainer` when empty.
    pub fn last_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(ContainerError::EmptyContainer)
    }

    /// The live elements as one contiguous slice.
    pub fn data(&self) -> &[T] {
        self.as_slice()
    }

    /// The live elements as one contiguous mutable slice.
    pub fn data_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is live.
        unsafe { self.buf.assume_init(0..self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[0, len)` is live.
        unsafe { self.buf.assume_init_mut(0..self.len) }
    }

    /// Pointer to the first slot. Valid until the next reallocation.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable pointer to the first slot. Valid until the next reallocation.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Iterator over shared references, front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterator over mutable references, front to back.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

// ── Mutation ───────────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Append `value`. Amortized O(1).
    ///
    /// Does not invalidate cursors unless the buffer has to grow.
    pub fn push_back(&mut self, value: T) -> Result<(), ContainerError> {
        self.grow_by(1)?;
        self.buf.write(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element; `EmptyContainer` when empty.
    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        if self.len == 0 {
            return Err(ContainerError::EmptyContainer);
        }
        self.len -= 1;
        self.bump();
        // SAFETY: slot `len` was the last live slot and is now past `len`.
        Ok(unsafe { self.buf.read(self.len) })
    }

    /// Insert `value` before index `pos` (`pos == len` appends).
    ///
    /// Returns `pos`. O(len − pos). `OutOfRange` when `pos > len`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, ContainerError> {
        self.check_insert_pos(pos)?;
        self.grow_by(1)?;
        self.buf.write(self.len, value);
        self.buf.rotate_right(pos..self.len + 1, 1);
        self.len += 1;
        self.bump();
        Ok(pos)
    }

    /// Insert `count` clones of `value` before index `pos`.
    ///
    /// All clones are made before the array is touched, so a panicking
    /// `Clone` or a failed allocation leaves it unchanged.
    pub fn insert_n(&mut self, pos: usize, count: usize, value: &T) -> Result<usize, ContainerError>
    where
        T: Clone,
    {
        self.check_insert_pos(pos)?;
        let staged: Staged<T> = (0..count).map(|_| value.clone()).collect();
        self.splice_staged(pos, staged)
    }

    /// Insert clones of `src`, in order, before index `pos`.
    pub fn insert_from_slice(&mut self, pos: usize, src: &[T]) -> Result<usize, ContainerError>
    where
        T: Clone,
    {
        self.check_insert_pos(pos)?;
        let staged: Staged<T> = src.iter().cloned().collect();
        self.splice_staged(pos, staged)
    }

    /// Insert every item of `items`, in order, before index `pos`.
    ///
    /// The iterator is drained before the array is touched.
    pub fn insert_iter<I>(&mut self, pos: usize, items: I) -> Result<usize, ContainerError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert_pos(pos)?;
        let staged: Staged<T> = items.into_iter().collect();
        self.splice_staged(pos, staged)
    }

    /// Remove and return the element at `pos`, shifting the tail left.
    ///
    /// O(len − pos). `OutOfRange` when `pos >= len`.
    pub fn erase(&mut self, pos: usize) -> Result<T, ContainerError> {
        if pos >= self.len {
            return Err(ContainerError::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        self.buf.rotate_left(pos..self.len, 1);
        self.len -= 1;
        self.bump();
        // SAFETY: the removed element was rotated to slot `len`, which is
        // now past the live prefix.
        Ok(unsafe { self.buf.read(self.len) })
    }

    /// Remove `count` elements starting at `pos`.
    ///
    /// Returns the index of the element that followed the removed block.
    pub fn erase_n(&mut self, pos: usize, count: usize) -> Result<usize, ContainerError> {
        let end = pos.checked_add(count).ok_or(ContainerError::OutOfRange {
            index: usize::MAX,
            len: self.len,
        })?;
        self.erase_range(pos..end)
    }

    /// Remove the elements in `range`.
    ///
    /// `InvalidRange` if the range is inverted, `OutOfRange` if it
    /// extends past `len`. Returns `range.start`.
    pub fn erase_range(&mut self, range: Range<usize>) -> Result<usize, ContainerError> {
        let Range { start, end } = range;
        checked_subslice(self.as_slice(), start..end)?;
        if start == end {
            return Ok(start);
        }
        let old_len = self.len;
        self.buf.rotate_left(start..old_len, end - start);
        self.len = old_len - (end - start);
        self.bump();
        // SAFETY: the removed block now occupies `[len, old_len)`.
        unsafe { self.buf.drop_range(self.len..old_len) }
        Ok(start)
    }

    /// Append clones of every element of `src`.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        self.grow_by(src.len())?;
        for value in src {
            self.buf.write(self.len, value.clone());
            self.len += 1;
        }
        Ok(())
    }

    /// Replace the contents with `count` clones of `value`.
    pub fn assign(&mut self, count: usize, value: &T) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        self.prepare_assign(count)?;
        self.resize_with(count, || value.clone())
    }

    /// Replace the contents with clones of `src`.
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        self.prepare_assign(src.len())?;
        self.extend_from_slice(src)
    }

    /// Exchange the entire state of two arrays in O(1).
    ///
    /// Identities move with the storage, so cursors follow their elements.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn check_insert_pos(&self, pos: usize) -> Result<(), ContainerError> {
        if pos > self.len {
            return Err(ContainerError::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Move already-built values into place before `pos`.
    ///
    /// Nothing after the allocation can panic: writes and rotations are
    /// bitwise moves.
    fn splice_staged(&mut self, pos: usize, staged: Staged<T>) -> Result<usize, ContainerError> {
        let count = staged.len();
        if count == 0 {
            return Ok(pos);
        }
        self.grow_by(count)?;
        let old_len = self.len;
        for (offset, value) in staged.into_iter().enumerate() {
            self.buf.write(old_len + offset, value);
        }
        self.buf.rotate_right(pos..old_len + count, count);
        self.len = old_len + count;
        self.bump();
        Ok(pos)
    }

    /// Clear, making sure `count` elements fit without touching the
    /// contents if the allocation fails.
    fn prepare_assign(&mut self, count: usize) -> Result<(), ContainerError> {
        let fresh = if count > self.capacity() {
            Some(RawBuf::try_allocate(self.policy.grow(self.capacity(), count))?)
        } else {
            None
        };
        let old_len = mem::replace(&mut self.len, 0);
        self.bump();
        // SAFETY: `[0, old_len)` was live and is now past `len`.
        unsafe { self.buf.drop_range(0..old_len) }
        if let Some(fresh) = fresh {
            self.buf = fresh;
        }
        Ok(())
    }

    /// Infallible append for the std conversion traits.
    ///
    /// Panics on capacity overflow and aborts on out-of-memory, like the
    /// standard collections.
    fn push_or_abort(&mut self, value: T) {
        if self.len == self.capacity() {
            let fresh = RawBuf::allocate(self.policy.grow(self.capacity(), self.len + 1));
            self.relocate(fresh);
        }
        self.buf.write(self.len, value);
        self.len += 1;
    }
}

// ── Cursors ────────────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Cursor at index 0.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.id, self.generation, 0)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.id, self.generation, self.len)
    }

    /// Cursor at `index`; `OutOfRange` when `index > len`.
    pub fn cursor(&self, index: usize) -> Result<Cursor, ContainerError> {
        self.check_insert_pos(index)?;
        Ok(Cursor::new(self.id, self.generation, index))
    }

    /// Validate `cursor` against this array and return its index.
    ///
    /// `InvalidIterator` if it was taken from another array or before a
    /// restructuring mutation; `OutOfRange` if it points past `len`.
    pub fn resolve(&self, cursor: Cursor) -> Result<usize, ContainerError> {
        if cursor.container != self.id {
            return Err(ContainerError::InvalidIterator {
                fault: CursorFault::ForeignContainer {
                    cursor: cursor.container,
                    container: self.id,
                },
            });
        }
        if cursor.generation != self.generation {
            return Err(ContainerError::InvalidIterator {
                fault: CursorFault::Stale {
                    cursor: cursor.generation,
                    current: self.generation,
                },
            });
        }
        self.check_insert_pos(cursor.index)?;
        Ok(cursor.index)
    }

    /// Insert `value` at `cursor`; returns a fresh cursor to it.
    pub fn insert_at(&mut self, cursor: Cursor, value: T) -> Result<Cursor, ContainerError> {
        let pos = self.resolve(cursor)?;
        self.insert(pos, value)?;
        Ok(Cursor::new(self.id, self.generation, pos))
    }

    /// Remove and return the element at `cursor`.
    pub fn erase_at(&mut self, cursor: Cursor) -> Result<T, ContainerError> {
        let pos = self.resolve(cursor)?;
        self.erase(pos)
    }

    /// Remove the elements in `[first, last)`; returns a fresh cursor
    /// to the element that followed them.
    pub fn erase_between(&mut self, first: Cursor, last: Cursor) -> Result<Cursor, ContainerError> {
        let start = self.resolve(first)?;
        let end = self.resolve(last)?;
        self.erase_range(start..end)?;
        Ok(Cursor::new(self.id, self.generation, start))
    }
}

/// `src[range]`, with the array's error taxonomy.
fn checked_subslice<T>(src: &[T], range: Range<usize>) -> Result<&[T], ContainerError> {
    let Range { start, end } = range;
    if end < start {
        return Err(ContainerError::InvalidRange { start, end });
    }
    src.get(start..end).ok_or(ContainerError::OutOfRange {
        index: end,
        len: src.len(),
    })
}

// ── Trait impls ────────────────────────────────────────────────

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: `[0, len)` was live; `len` is reset first so a
        // panicking destructor cannot lead to a second drop.
        unsafe { self.buf.drop_range(0..len) }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep copy preserving capacity. Aborts on out-of-memory; see
    /// [`DynamicArray::try_clone`].
    fn clone(&self) -> Self {
        self.clone_into_buf(RawBuf::allocate(self.capacity()))
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_or_abort(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(src: &[T]) -> Self {
        src.iter().cloned().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(src: [T; N]) -> Self {
        src.into_iter().collect()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let len = mem::replace(&mut self.len, 0);
        let buf = mem::replace(&mut self.buf, RawBuf::empty());
        IntoIter::new(buf, len)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
