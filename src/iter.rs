//! Contains the array iterator types.

use core::iter::FusedIterator;

use crate::collection::DynamicArray;

macro_rules! impl_iterator {
	($name:ident, $value:ty) => {
		/// An iterator over the elements of the array, front to back.
		pub struct $name<'a, T> {
			pub(crate) buf: core::slice::$name<'a, T>,
		}

		impl<'a, T> Iterator for $name<'a, T> {
			type Item = $value;

			#[inline]
			fn next(&mut self) -> Option<Self::Item> {
				self.buf.next()
			}

			#[inline]
			fn size_hint(&self) -> (usize, Option<usize>) {
				self.buf.size_hint()
			}

			#[inline]
			fn count(self) -> usize {
				self.buf.len()
			}
		}

		impl<'a, T> DoubleEndedIterator for $name<'a, T> {
			#[inline]
			fn next_back(&mut self) -> Option<Self::Item> {
				self.buf.next_back()
			}
		}

		impl<T> ExactSizeIterator for $name<'_, T> {}

		impl<T> FusedIterator for $name<'_, T> {}
	};
}

impl_iterator!(Iter, &'a T);
impl_iterator!(IterMut, &'a mut T);

impl<T> DynamicArray<T> {
	/// Returns an iterator over the array elements.
	#[must_use]
	pub fn iter(&self) -> Iter<'_, T> {
		let buf = self.as_slice().iter();

		Iter { buf }
	}

	/// Returns a mutable iterator over the array elements.
	#[must_use]
	pub fn iter_mut(&mut self) -> IterMut<'_, T> {
		let buf = self.as_mut_slice().iter_mut();

		IterMut { buf }
	}
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
	type Item = &'a mut T;
	type IntoIter = IterMut<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

#[cfg(test)]
mod tests {
	use crate::collection::DynamicArray;

	#[test]
	fn iterate_all() {
		const COUNT: usize = 100;

		let array: DynamicArray<usize> = (0..COUNT).map(|i| COUNT - i).collect();
		let mut count = 0;

		for (i, value) in array.iter().enumerate() {
			assert_eq!(*value, COUNT - i);

			count += 1;
		}

		assert_eq!(count, COUNT);
		assert_eq!(array.iter().len(), COUNT);
	}

	#[test]
	fn iterate_backwards() {
		let array: DynamicArray<char> = "abcde".chars().collect();
		let reversed: String = array.iter().rev().collect();

		assert_eq!(reversed, "edcba");
	}

	#[test]
	fn iterate_skips_stale_slots() {
		let mut array: DynamicArray<u8> = [1, 2, 3, 4].into_iter().collect();

		array.clear();
		array.push(5);

		assert_eq!(array.iter().copied().collect::<Vec<_>>(), [5]);
	}

	#[test]
	fn mutate_through_iterator() {
		let mut array: DynamicArray<i32> = (1..=4).collect();

		for value in &mut array {
			*value *= 10;
		}

		assert_eq!(array.as_slice(), &[10, 20, 30, 40]);
	}
}
