//! Strata: generic sequence containers with value semantics.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mut arr = DynamicArray::new();
//! arr.push_back(10)?;
//! arr.push_back(20)?;
//! arr.push_back(30)?;
//! arr.insert(1, 15)?;
//! arr.erase(0)?;
//! assert_eq!(arr, [15, 20, 30]);
//!
//! // Copies are deep and independent.
//! let mut copy = arr.try_clone()?;
//! copy.push_back(40)?;
//! assert_eq!(arr.len(), 3);
//!
//! // Cursors are invalidated by restructuring mutations.
//! let cursor = arr.cursor(1)?;
//! arr.erase(0)?;
//! assert!(matches!(
//!     arr.resolve(cursor),
//!     Err(ContainerError::InvalidIterator { .. })
//! ));
//!
//! let mut list: LinkedList<&str> = LinkedList::new();
//! list.push_back("b");
//! list.push_front("a");
//! assert_eq!(list.front()?, &"a");
//! # Ok::<(), ContainerError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Errors, growth policy, container IDs |
//! | [`array`] | `strata-array` | `DynamicArray`, cursors, owning iterator |
//! | [`list`] | `strata-list` | `LinkedList` and its iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared vocabulary types (`strata-core`).
///
/// The [`types::ContainerError`] taxonomy, the [`types::GrowthPolicy`]
/// configuration, and the identity types behind cursor validation.
pub use strata_core as types;

/// The growable contiguous array (`strata-array`).
pub use strata_array as array;

/// The singly linked list (`strata-list`).
pub use strata_list as list;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use strata_array::{Cursor, DynamicArray};
    pub use strata_list::LinkedList;

    // Configuration and errors
    pub use strata_core::{ContainerError, CursorFault, GrowthPolicy, PolicyError};
}
