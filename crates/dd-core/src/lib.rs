//! # dd-core
//!
//! Error definitions shared by the datedim crates.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single [`Error`] enum defined here.  The [`ensure!`] macro is
//! the usual way to state a precondition.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
