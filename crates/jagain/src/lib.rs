#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! jagain core library
//!
//! Two leaf-level containers and the conversions between them:
//!
//! - [`Maybe`]: a value, or nothing
//! - [`Outcome`]: a value, or an error
//!
//! Misusing an extracting accessor (`unwrap` on an absent value or a
//! failure, `unwrap_error` on a success) is a fatal fault described by
//! [`UnwrapError`]; everything else treats absence and failure as ordinary
//! values.

pub mod error;
pub mod maybe;
pub mod outcome;

#[cfg(feature = "serde")]
mod serde_impls;

mod proptests;

// Re-exports for convenience
pub use error::{BoxError, UnwrapError};
pub use maybe::Maybe;
pub use outcome::{Outcome, flat_map_to, map_to, match_to};
