//! Singly linked list for the Strata container library.
//!
//! # Contract
//!
//! - Each node exclusively owns its value and the link to its successor;
//!   the list owns the head of the chain and keeps a non-owning pointer
//!   to the tail.
//! - `push_front`, `push_back`, `pop_front`: O(1).
//! - `pop_back`, `at`, `insert_at`, `remove_at`: O(n), walking from the head.
//! - Iteration runs front to back.
//! - `clear` (and `Drop`) releases nodes front to back, iteratively, each
//!   exactly once, so long lists cannot overflow the stack.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod list;

pub use list::{IntoIter, Iter, IterMut, LinkedList};
pub use strata_core::ContainerError;
