//! Contains the [`DynamicArray`] type, which is the main type of this crate.

use core::{
	fmt::{self, Debug, Formatter},
	ops::{Index, IndexMut},
};

use crate::{
	error::{ArgumentError, Error},
	position::Position,
};

/// The capacity allocated by the first growth of an empty array.
pub const INITIAL_CAPACITY: usize = 1;

/// The factor applied to the capacity when a full array grows.
pub const GROWTH_FACTOR: usize = 2;

fn allocate<T>(capacity: usize) -> Result<Vec<T>, Error> {
	let mut slots = Vec::new();

	slots.try_reserve_exact(capacity).map_err(|source| {
		log::debug!("failed to allocate {capacity} slots: {source}");

		Error::AllocationFailure { capacity, source }
	})?;

	Ok(slots)
}

fn length_of<N: Position>(count: N) -> Result<usize, Error> {
	count
		.to_index()
		.ok_or_else(|| ArgumentError::InvalidLength(count.widen()).into())
}

/// A [`DynamicArray`] is a growable, contiguous sequence of values.
///
/// Every slot of the buffer holds a value, but only the first [`len`](Self::len)
/// are part of the array. Slots past that are stale and are overwritten by later
/// pushes. The buffer is only ever replaced by a strictly larger one, so the
/// capacity never decreases.
pub struct DynamicArray<T> {
	pub(crate) slots: Vec<T>,
	pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
	/// Creates a new, empty [`DynamicArray`]. Nothing is allocated.
	#[inline]
	#[must_use]
	pub const fn new() -> Self {
		Self {
			slots: Vec::new(),
			len: 0,
		}
	}

	/// Returns the number of elements in the [`DynamicArray`].
	#[inline]
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Returns the number of slots allocated for the [`DynamicArray`].
	#[inline]
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	/// Returns `true` if the [`DynamicArray`] contains no elements.
	#[inline]
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Clears the [`DynamicArray`]. The buffer and its capacity are kept, and the
	/// old values stay in their slots until they are overwritten.
	#[inline]
	pub fn clear(&mut self) {
		self.len = 0;
	}

	/// Returns the elements of the [`DynamicArray`] as a slice.
	#[inline]
	#[must_use]
	pub fn as_slice(&self) -> &[T] {
		&self.slots[..self.len]
	}

	/// Returns the elements of the [`DynamicArray`] as a mutable slice.
	#[inline]
	#[must_use]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.slots[..self.len]
	}

	/// Returns a reference to the element at `index`, if it is in range.
	#[inline]
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&T> {
		self.as_slice().get(index)
	}

	/// Returns a mutable reference to the element at `index`, if it is in range.
	#[inline]
	#[must_use]
	pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
		self.as_mut_slice().get_mut(index)
	}

	/// Returns a reference to the first element, if there is one.
	#[inline]
	#[must_use]
	pub fn first(&self) -> Option<&T> {
		self.as_slice().first()
	}

	/// Returns a reference to the last element, if there is one.
	#[inline]
	#[must_use]
	pub fn last(&self) -> Option<&T> {
		self.as_slice().last()
	}

	fn checked_index<I: Position>(&self, index: I) -> Result<usize, Error> {
		index
			.to_index()
			.filter(|&index| index < self.len)
			.ok_or_else(|| Error::IndexOutOfRange {
				index: index.widen(),
				len: self.len,
			})
	}

	/// Returns a mutable reference to the element at `index`.
	///
	/// # Errors
	///
	/// Fails with [`Error::IndexOutOfRange`] unless `0 <= index < len`.
	pub fn at_mut<I: Position>(&mut self, index: I) -> Result<&mut T, Error> {
		let index = self.checked_index(index)?;

		Ok(&mut self.slots[index])
	}

	/// Replaces the buffer with one of `new_capacity` slots. The live elements are
	/// moved to the front and the remaining slots are produced by `fill`.
	///
	/// Nothing is modified until the new buffer has been allocated and filled.
	fn relocate(&mut self, new_capacity: usize, fill: impl FnMut() -> T) -> Result<(), Error> {
		let current = self.capacity();

		if new_capacity <= current {
			log::debug!("rejected growth from {current} to {new_capacity} slots");

			return Err(ArgumentError::CapacityNotIncreased {
				requested: new_capacity,
				current,
			}
			.into());
		}

		// The tail is produced before the array is touched, as `fill` may panic.
		let mut tail = allocate(new_capacity - self.len)?;
		let mut slots = allocate(new_capacity)?;

		tail.resize_with(new_capacity - self.len, fill);

		let old = core::mem::take(&mut self.slots);

		slots.extend(old.into_iter().take(self.len));
		slots.append(&mut tail);

		log::trace!(
			"grew buffer from {current} to {new_capacity} slots, moved {} elements",
			self.len
		);

		self.slots = slots;

		Ok(())
	}
}

impl<T: Default> DynamicArray<T> {
	/// Creates a [`DynamicArray`] of `count` default values, with exactly `count` slots.
	///
	/// # Errors
	///
	/// Fails with [`Error::InvalidArgument`] if `count` is negative, or with
	/// [`Error::AllocationFailure`] if the buffer cannot be allocated.
	pub fn with_len<N: Position>(count: N) -> Result<Self, Error> {
		let count = length_of(count)?;
		let mut array = Self::new();

		if count > 0 {
			array.grow(count)?;
			array.len = count;
		}

		Ok(array)
	}

	/// Grows the buffer to exactly `new_capacity` slots, keeping every element.
	/// On failure, including a panic in `T::default`, the array is left as it was.
	///
	/// Every new slot is produced by `T::default`, so the cost is linear in
	/// `new_capacity` even for zero-sized types.
	///
	/// # Errors
	///
	/// Fails with [`Error::InvalidArgument`] if `new_capacity` does not exceed the
	/// current capacity, or with [`Error::AllocationFailure`] if the buffer cannot
	/// be allocated.
	pub fn grow(&mut self, new_capacity: usize) -> Result<(), Error> {
		self.relocate(new_capacity, T::default)
	}

	/// Attempts to append `value`, growing the buffer if it is full.
	///
	/// # Errors
	///
	/// Fails with [`Error::AllocationFailure`] if the buffer had to grow and
	/// could not, in which case the array is left untouched. Doubling saturates at
	/// `usize::MAX`, so a full array of a zero-sized type at that capacity fails
	/// with [`Error::InvalidArgument`] instead, as no allocation is ever attempted.
	pub fn try_push(&mut self, value: T) -> Result<(), Error> {
		let current = self.capacity();

		if current == 0 {
			self.grow(INITIAL_CAPACITY)?;
		} else if self.len == current {
			self.grow(current.saturating_mul(GROWTH_FACTOR))?;
		}

		self.slots[self.len] = value;
		self.len += 1;

		Ok(())
	}

	/// Appends `value`, growing the buffer if it is full.
	#[inline]
	pub fn push(&mut self, value: T) {
		self.try_push(value).expect("array could not grow");
	}
}

impl<T: Clone> DynamicArray<T> {
	/// Creates a [`DynamicArray`] of `count` copies of `value`, with exactly `count` slots.
	///
	/// # Errors
	///
	/// Fails with [`Error::InvalidArgument`] if `count` is negative, or with
	/// [`Error::AllocationFailure`] if the buffer cannot be allocated.
	pub fn from_elem<N: Position>(count: N, value: T) -> Result<Self, Error> {
		let count = length_of(count)?;
		let mut array = Self::new();

		if count > 0 {
			array.grow_with(count, &value)?;
			array.len = count;
		}

		Ok(array)
	}

	fn grow_with(&mut self, new_capacity: usize, fill: &T) -> Result<(), Error> {
		self.relocate(new_capacity, || fill.clone())
	}

	/// Returns a copy of the element at `index`.
	///
	/// # Errors
	///
	/// Fails with [`Error::IndexOutOfRange`] unless `0 <= index < len`.
	pub fn at<I: Position>(&self, index: I) -> Result<T, Error> {
		let index = self.checked_index(index)?;

		Ok(self.slots[index].clone())
	}
}

impl<T: Clone + Default> DynamicArray<T> {
	/// Replaces the contents with copies of the elements of `source`. The buffer is
	/// reused when it is large enough, otherwise it grows to exactly `source.len()`.
	///
	/// # Errors
	///
	/// Fails with [`Error::AllocationFailure`] if the buffer had to grow and could
	/// not, in which case the array is left empty with its old buffer.
	pub fn assign(&mut self, source: &Self) -> Result<(), Error> {
		self.len = 0;

		if self.capacity() < source.len() {
			self.grow(source.len())?;
		}

		self.len = source.len();
		self.slots[..source.len()].clone_from_slice(source.as_slice());

		Ok(())
	}

	/// Attempts to create an independent copy. The copy only allocates as many
	/// slots as there are elements, and allocates nothing when empty.
	///
	/// # Errors
	///
	/// Fails with [`Error::AllocationFailure`] if the buffer cannot be allocated.
	pub fn try_clone(&self) -> Result<Self, Error> {
		let mut array = Self::new();

		if !self.is_empty() {
			array.assign(self)?;
		}

		Ok(array)
	}
}

impl<T> Default for DynamicArray<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
	fn clone(&self) -> Self {
		self.try_clone().expect("array could not be copied")
	}

	fn clone_from(&mut self, source: &Self) {
		self.assign(source).expect("array could not be copied");
	}
}

impl<T: Debug> Debug for DynamicArray<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.as_slice()).finish()
	}
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
	type Output = T;

	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		self.get(index).expect("index out of range")
	}
}

impl<T> IndexMut<usize> for DynamicArray<T> {
	#[inline]
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		self.get_mut(index).expect("index out of range")
	}
}

impl<T: Default> Extend<T> for DynamicArray<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.push(value);
		}
	}
}

impl<T: Default> FromIterator<T> for DynamicArray<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut array = Self::new();

		array.extend(iter);

		array
	}
}

#[cfg(test)]
mod test {
	use crate::error::{ArgumentError, Error};

	use super::DynamicArray;

	fn filled(values: &[i32]) -> DynamicArray<i32> {
		values.iter().copied().collect()
	}

	#[test]
	fn new_does_not_allocate() {
		let array = DynamicArray::<i32>::new();

		assert_eq!(array.len(), 0);
		assert_eq!(array.capacity(), 0);
		assert!(array.is_empty());
	}

	#[test]
	fn with_len_is_exact() {
		let array = DynamicArray::<u32>::with_len(3).unwrap();

		assert_eq!(array.len(), 3);
		assert_eq!(array.capacity(), 3);
		assert_eq!(array.as_slice(), &[0, 0, 0]);

		let empty = DynamicArray::<u32>::with_len(0).unwrap();

		assert_eq!(empty.capacity(), 0);
	}

	#[test]
	fn with_len_rejects_negative() {
		let result = DynamicArray::<u32>::with_len(-1);

		assert_eq!(
			result.unwrap_err(),
			Error::InvalidArgument(ArgumentError::InvalidLength(-1))
		);

		let result = DynamicArray::from_elem(-4_i64, 'x');

		assert_eq!(
			result.unwrap_err(),
			Error::InvalidArgument(ArgumentError::InvalidLength(-4))
		);
	}

	#[test]
	fn from_elem_fills_every_slot() {
		let array = DynamicArray::from_elem(4, String::from("ab")).unwrap();

		assert_eq!(array.len(), 4);
		assert_eq!(array.capacity(), 4);
		assert!(array.iter().all(|value| value == "ab"));
	}

	#[test]
	fn push_doubles_capacity() {
		let mut array = DynamicArray::new();
		let mut seen = vec![array.capacity()];

		for i in 0..17 {
			array.push(i);

			if seen.last() != Some(&array.capacity()) {
				seen.push(array.capacity());
			}
		}

		assert_eq!(seen, [0, 1, 2, 4, 8, 16, 32]);
		assert_eq!(array.len(), 17);
	}

	#[test]
	fn push_after_sized_construction() {
		let mut array = DynamicArray::<u8>::with_len(3).unwrap();

		array.push(9);

		assert_eq!(array.capacity(), 6);
		assert_eq!(array.as_slice(), &[0, 0, 0, 9]);
	}

	#[test]
	fn at_checks_bounds() {
		let mut array = filled(&[10, 20, 30]);

		assert_eq!(array.at(0), Ok(10));
		assert_eq!(array.at(2_usize), Ok(30));
		assert_eq!(
			array.at(-1),
			Err(Error::IndexOutOfRange { index: -1, len: 3 })
		);
		assert_eq!(
			array.at(3),
			Err(Error::IndexOutOfRange { index: 3, len: 3 })
		);

		*array.at_mut(1).unwrap() = 25;

		assert_eq!(array[1], 25);
		assert!(array.at_mut(3).is_err());
		assert!(array.at_mut(i8::MIN).is_err());
	}

	#[test]
	fn at_ignores_stale_slots() {
		let mut array = filled(&[1, 2, 3]);

		array.clear();

		assert_eq!(
			array.at(0),
			Err(Error::IndexOutOfRange { index: 0, len: 0 })
		);
		assert_eq!(array.get(0), None);
	}

	#[test]
	fn at_returns_a_copy() {
		let array = DynamicArray::from_elem(1, vec![1, 2]).unwrap();
		let mut copy = array.at(0).unwrap();

		copy.push(3);

		assert_eq!(array[0], [1, 2]);
	}

	#[test]
	fn clear_keeps_capacity() {
		let mut array = filled(&[1, 2, 3, 4, 5]);
		let capacity = array.capacity();

		array.clear();

		assert_eq!(array.len(), 0);
		assert_eq!(array.capacity(), capacity);

		array.push(7);

		assert_eq!(array.as_slice(), &[7]);
		assert_eq!(array.capacity(), capacity);
	}

	#[test]
	fn grow_rejects_smaller_capacity() {
		let mut array = filled(&[1, 2]);

		assert_eq!(
			array.grow(2),
			Err(Error::InvalidArgument(ArgumentError::CapacityNotIncreased {
				requested: 2,
				current: 2
			}))
		);
		assert!(array.grow(1).is_err());
		assert!(DynamicArray::<i32>::new().grow(0).is_err());

		array.grow(10).unwrap();

		assert_eq!(array.capacity(), 10);
		assert_eq!(array.as_slice(), &[1, 2]);
	}

	#[test]
	fn failed_growth_leaves_array_untouched() {
		let mut array = filled(&[1, 2, 3]);
		let capacity = array.capacity();

		let result = array.grow(usize::MAX);

		assert!(matches!(
			result,
			Err(Error::AllocationFailure {
				capacity: usize::MAX,
				..
			})
		));
		assert_eq!(array.len(), 3);
		assert_eq!(array.capacity(), capacity);
		assert_eq!(array.as_slice(), &[1, 2, 3]);
	}

	#[test]
	fn failed_construction_reports_allocation() {
		let result = DynamicArray::<u64>::with_len(usize::MAX);

		assert!(matches!(result, Err(Error::AllocationFailure { .. })));
	}

	#[test]
	fn copy_is_independent() {
		let a = filled(&[1, 2, 3]);
		let mut b = a.clone();

		*b.at_mut(0).unwrap() = 100;

		assert_eq!(a.at(0), Ok(1));
		assert_eq!(b.at(0), Ok(100));
		assert_eq!(b.capacity(), 3);
	}

	#[test]
	fn copy_of_empty_does_not_allocate() {
		let mut a = filled(&[1]);

		a.clear();

		let b = a.try_clone().unwrap();

		assert_eq!(b.capacity(), 0);
	}

	#[test]
	fn assign_reuses_buffer() {
		let mut destination = filled(&[9, 9, 9, 9, 9]);
		let source = filled(&[1, 2]);

		destination.assign(&source).unwrap();

		assert_eq!(destination.as_slice(), &[1, 2]);
		assert_eq!(destination.capacity(), 8);

		let larger = filled(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

		destination.assign(&larger).unwrap();

		assert_eq!(destination, larger);
		assert_eq!(destination.capacity(), 10);
	}

	#[test]
	fn assign_from_equal_contents() {
		let mut array = filled(&[4, 5, 6]);
		let same = array.clone();

		array.clone_from(&same);

		assert_eq!(array.as_slice(), &[4, 5, 6]);
		assert_eq!(array.len(), 3);
	}

	#[test]
	fn end_to_end() {
		let mut v = DynamicArray::new();

		for i in 1..=5 {
			v.push(i);
		}

		assert_eq!(v.len(), 5);
		assert_eq!(v.capacity(), 8);
		assert_eq!(v.at(2), Ok(3));

		let mut w = v.clone();

		w.push(6);

		assert_eq!(v.len(), 5);
		assert_eq!(w.len(), 6);
		assert_eq!(v.at(4), Ok(5));
		assert_eq!(w.at(4), Ok(5));
		assert_eq!(w.at(5), Ok(6));
	}

	#[test]
	fn debug_lists_live_elements() {
		let mut array = filled(&[1, 2, 3]);

		array.clear();
		array.push(8);

		assert_eq!(format!("{array:?}"), "[8]");
	}

	#[derive(Clone, Debug, PartialEq)]
	struct Volatile(u8);

	impl Default for Volatile {
		fn default() -> Self {
			panic!("no default value")
		}
	}

	#[test]
	fn panicking_fill_leaves_array_untouched() {
		let mut array = DynamicArray::from_elem(2, Volatile(7)).unwrap();

		let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| array.grow(4)));

		assert!(result.is_err());
		assert_eq!(array.len(), 2);
		assert_eq!(array.capacity(), 2);
		assert!(array.len() <= array.capacity());
		assert_eq!(array.as_slice(), &[Volatile(7), Volatile(7)]);

		let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
			array.push(Volatile(8));
		}));

		assert!(result.is_err());
		assert_eq!(array.capacity(), 2);
		assert_eq!(array.first(), Some(&Volatile(7)));
		assert_eq!(array.last(), Some(&Volatile(7)));
	}
}
