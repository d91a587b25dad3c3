#![forbid(unsafe_code)]

//! A [`DynamicArray`] is a contiguous, growable array with value semantics. Its growth policy is fixed
//! and observable: nothing is allocated until the first growth, the first growth allocates a single
//! slot, and every later growth doubles the capacity.
//!
//! ## Example
//!
//! ```rust
//! # use dynarray::collection::DynamicArray;
//! let mut array = DynamicArray::new();
//!
//! for value in 1..=5 {
//!     array.push(value);
//! }
//!
//! assert_eq!(array.len(), 5);
//! assert_eq!(array.capacity(), 8);
//! assert_eq!(array.at(2), Ok(3));
//! ```
//!
//! ## Features
//!
//! - Amortized `O(1)` appends
//! - Checked indexing with typed errors
//! - Growth that either fully succeeds or leaves the array untouched
//! - Position cursors alongside borrow-checked iterators
//! - No `unsafe` code

pub mod collection;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod position;

pub use collection::DynamicArray;
pub use error::{ArgumentError, Error};
