//! Growable contiguous storage for the Strata container library.
//!
//! Provides [`DynamicArray`], a value-semantic sequence backed by a
//! single exclusively owned heap block, together with generation-tagged
//! [`Cursor`] positions and a by-value [`IntoIter`]. This crate is one of
//! two that may contain `unsafe` code (along with `strata-list`); it is
//! confined to the buffer handle and element-lifetime bookkeeping.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── RawBuf<T>        (Box<[MaybeUninit<T>]>, owns the block, never drops T)
//! ├── len              (slots [0, len) are live)
//! ├── GrowthPolicy     (implicit growth sizing, from strata-core)
//! └── ContainerId + Generation (cursor validation)
//! ```
//!
//! # Safety contract
//!
//! - Every allocation is released exactly once, on every exit path.
//! - Relocation is build-then-swap: the destination is allocated before
//!   the source is touched, and moving elements across cannot fail.
//! - `len` is updated before any user code runs, so a panic in `Clone`,
//!   `Default`, or `Drop` never leaves a dropped element counted as live
//!   or a live element uncounted.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod cursor;
pub mod iter;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use cursor::Cursor;
pub use iter::IntoIter;
pub use strata_core::{ContainerError, GrowthPolicy};
