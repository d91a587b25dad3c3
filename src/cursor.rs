//! Contains the [`Cursor`] and [`ConstCursor`] position handles.
//!
//! A cursor only records a slot position. It is dereferenced by indexing the
//! array it came from, e.g. `array[cursor]`. Cursors are not tied to the
//! array's lifetime, so after the array grows, is cleared, or is dropped, a
//! cursor refers to whatever occupies that position, if anything. Moving a
//! cursor is never checked. Dereferencing a position outside the live elements
//! panics. Use [`DynamicArray::iter`] when the borrow checker should rule out
//! stale positions.

use core::{
	fmt::{self, Debug, Formatter},
	marker::PhantomData,
	ops::{Index, IndexMut},
};

use crate::collection::DynamicArray;

macro_rules! impl_cursor {
	($name:ident) => {
		pub struct $name<T> {
			position: usize,
			marker: PhantomData<fn() -> T>,
		}

		impl<T> $name<T> {
			#[inline]
			pub(crate) const fn at(position: usize) -> Self {
				Self {
					position,
					marker: PhantomData,
				}
			}

			/// Returns the slot position the cursor refers to.
			#[inline]
			#[must_use]
			pub const fn position(self) -> usize {
				self.position
			}

			/// Moves the cursor one slot forward, returning the moved cursor.
			#[inline]
			pub fn increment(&mut self) -> &mut Self {
				self.position = self.position.wrapping_add(1);

				self
			}

			/// Moves the cursor one slot forward, returning where it was before.
			#[inline]
			pub fn post_increment(&mut self) -> Self {
				let old = *self;

				self.increment();

				old
			}

			/// Moves the cursor one slot backward, returning the moved cursor.
			#[inline]
			pub fn decrement(&mut self) -> &mut Self {
				self.position = self.position.wrapping_sub(1);

				self
			}

			/// Moves the cursor one slot backward, returning where it was before.
			#[inline]
			pub fn post_decrement(&mut self) -> Self {
				let old = *self;

				self.decrement();

				old
			}
		}

		impl<T> Clone for $name<T> {
			#[inline]
			fn clone(&self) -> Self {
				*self
			}
		}

		impl<T> Copy for $name<T> {}

		impl<T> PartialEq for $name<T> {
			#[inline]
			fn eq(&self, other: &Self) -> bool {
				self.position == other.position
			}
		}

		impl<T> Eq for $name<T> {}

		impl<T> Debug for $name<T> {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				f.debug_tuple(stringify!($name)).field(&self.position).finish()
			}
		}

		impl<T> Index<$name<T>> for DynamicArray<T> {
			type Output = T;

			#[inline]
			fn index(&self, cursor: $name<T>) -> &Self::Output {
				self.get(cursor.position).expect("cursor is not dereferenceable")
			}
		}
	};
}

impl_cursor!(Cursor);
impl_cursor!(ConstCursor);

impl<T> IndexMut<Cursor<T>> for DynamicArray<T> {
	#[inline]
	fn index_mut(&mut self, cursor: Cursor<T>) -> &mut Self::Output {
		self.get_mut(cursor.position)
			.expect("cursor is not dereferenceable")
	}
}

impl<T> From<Cursor<T>> for ConstCursor<T> {
	#[inline]
	fn from(cursor: Cursor<T>) -> Self {
		Self::at(cursor.position)
	}
}

impl<T> DynamicArray<T> {
	/// Returns a cursor at the first element.
	#[inline]
	#[must_use]
	pub fn begin(&self) -> Cursor<T> {
		Cursor::at(0)
	}

	/// Returns a cursor one past the last element. It cannot be dereferenced.
	#[inline]
	#[must_use]
	pub fn end(&self) -> Cursor<T> {
		Cursor::at(self.len())
	}

	/// Returns a read-only cursor at the first element.
	#[inline]
	#[must_use]
	pub fn cbegin(&self) -> ConstCursor<T> {
		ConstCursor::at(0)
	}

	/// Returns a read-only cursor one past the last element.
	#[inline]
	#[must_use]
	pub fn cend(&self) -> ConstCursor<T> {
		ConstCursor::at(self.len())
	}
}
