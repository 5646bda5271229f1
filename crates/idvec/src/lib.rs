#![doc = include_str!("../README.md")]

mod error;
mod id;
mod idvec;
mod iterators;

pub use error::*;
pub use id::*;
pub use idvec::*;
pub use iterators::*;

/// Mapping stored for identifiers that sit in the free pool.
///
/// Never a real storage position: storage length is bounded by `isize::MAX`.
pub(crate) const VACANT: usize = usize::MAX;
