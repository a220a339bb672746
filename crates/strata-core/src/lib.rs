//! Core types for the Strata container library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces shared by every container in the workspace: the error
//! taxonomy, the growth policy that drives buffer sizing, and the
//! identifiers used to validate cursors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod id;

pub use config::GrowthPolicy;
pub use error::{ContainerError, CursorFault, PolicyError};
pub use id::{ContainerId, Generation};
