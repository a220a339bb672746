//! Owned, possibly-uninitialized element storage.
//!
//! [`RawBuf`] is the single ownership handle over a container's heap
//! block. It knows its capacity but not which slots are live: tracking
//! that is the owning container's job. Dropping a `RawBuf` releases the
//! block exactly once and never runs `T`'s destructor.
//!
//! Every `unsafe` function here has one precondition: the slots it
//! touches must be initialized (or, for [`RawBuf::read`], must not be
//! read again afterwards).

#![allow(unsafe_code)]

use std::mem::MaybeUninit;
use std::ops::Range;
use std::{ptr, slice};

use strata_core::ContainerError;

/// Exclusively owned block of `capacity` slots of `T`.
pub(crate) struct RawBuf<T> {
    /// `Box<[MaybeUninit<T>]>` of length zero performs no allocation.
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RawBuf<T> {
    /// A buffer with no capacity and no allocation.
    pub(crate) fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Allocate `capacity` uninitialized slots.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `isize::MAX`. Aborts on
    /// out-of-memory, like the standard collections.
    pub(crate) fn allocate(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
        }
    }

    /// Allocate `capacity` uninitialized slots, reporting failure.
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, ContainerError> {
        let mut slots: Vec<MaybeUninit<T>> = Vec::new();
        if let Err(err) = slots.try_reserve_exact(capacity) {
            tracing::debug!(capacity, %err, "buffer allocation failed");
            return Err(ContainerError::AllocationFailure {
                requested: capacity,
            });
        }
        // SAFETY: `try_reserve_exact` made room for `capacity` slots, and
        // `MaybeUninit<T>` needs no initialization.
        unsafe { slots.set_len(capacity) };
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Number of slots in the block.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast()
    }

    /// Store `value` in slot `index`.
    ///
    /// Whatever the slot held before is overwritten without being
    /// dropped; callers only write to vacant slots.
    pub(crate) fn write(&mut self, index: usize, value: T) {
        self.slots[index].write(value);
    }

    /// Move the value out of slot `index`.
    ///
    /// # Safety
    ///
    /// The slot must be initialized, and the caller must treat it as
    /// vacant afterwards.
    pub(crate) unsafe fn read(&self, index: usize) -> T {
        // SAFETY: the caller guarantees the slot is initialized.
        unsafe { self.slots[index].assume_init_read() }
    }

    /// View `range` as initialized elements.
    ///
    /// # Safety
    ///
    /// Every slot in `range` must be initialized.
    pub(crate) unsafe fn assume_init(&self, range: Range<usize>) -> &[T] {
        let slots = &self.slots[range];
        // SAFETY: `MaybeUninit<T>` has the layout of `T`, and the caller
        // guarantees every slot in the range is initialized.
        unsafe { slice::from_raw_parts(slots.as_ptr().cast(), slots.len()) }
    }

    /// Mutable view of `range` as initialized elements.
    ///
    /// # Safety
    ///
    /// Every slot in `range` must be initialized.
    pub(crate) unsafe fn assume_init_mut(&mut self, range: Range<usize>) -> &mut [T] {
        let slots = &mut self.slots[range];
        // SAFETY: as in `assume_init`.
        unsafe { slice::from_raw_parts_mut(slots.as_mut_ptr().cast(), slots.len()) }
    }

    /// Run the destructor of every element in `range`.
    ///
    /// A panicking destructor does not stop the remaining elements of
    /// the range from being dropped.
    ///
    /// # Safety
    ///
    /// Every slot in `range` must be initialized, and the caller must
    /// treat them as vacant afterwards.
    pub(crate) unsafe fn drop_range(&mut self, range: Range<usize>) {
        // SAFETY: the caller guarantees the range is initialized and
        // will not be observed again.
        unsafe { ptr::drop_in_place(self.assume_init_mut(range)) }
    }

    /// Relocate slots `[0, len)` into the same positions of `dest`.
    ///
    /// The source slots are left vacant. This is a bitwise move and
    /// cannot fail.
    pub(crate) fn move_prefix_into(&mut self, dest: &mut RawBuf<T>, len: usize) {
        dest.slots[..len].swap_with_slice(&mut self.slots[..len]);
    }

    /// Rotate `range` right by `k` slots without touching any value.
    pub(crate) fn rotate_right(&mut self, range: Range<usize>, k: usize) {
        self.slots[range].rotate_right(k);
    }

    /// Rotate `range` left by `k` slots without touching any value.
    pub(crate) fn rotate_left(&mut self, range: Range<usize>, k: usize) {
        self.slots[range].rotate_left(k);
    }
}
