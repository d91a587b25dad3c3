//! Contains the [`Error`] type returned by fallible [`DynamicArray`](crate::DynamicArray) operations.

use std::collections::TryReserveError;

use thiserror::Error;

/// A rejected argument. These always point at a logic error in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
	#[error("length {0} is not a valid slot count")]
	InvalidLength(i128),

	#[error("capacity {requested} does not exceed the current capacity {current}")]
	CapacityNotIncreased { requested: usize, current: usize },
}

/// The ways an operation on a [`DynamicArray`](crate::DynamicArray) can fail.
/// A failed operation never leaves the array partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("invalid argument: {0}")]
	InvalidArgument(#[from] ArgumentError),

	#[error("index {index} is out of range for length {len}")]
	IndexOutOfRange { index: i128, len: usize },

	/// The allocator could not provide `capacity` slots. Retrying with a
	/// smaller request may succeed.
	#[error("unable to allocate a buffer of {capacity} slots")]
	AllocationFailure {
		capacity: usize,
		#[source]
		source: TryReserveError,
	},
}
