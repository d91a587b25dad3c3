//! Contains the [`Position`] trait, which lets indices and lengths be given as
//! any primitive integer. Negative values are representable so that they can be
//! reported as errors instead of being rejected by the type system.

macro_rules! impl_position {
	($($t:ty),* $(,)?) => {
		$(
			impl Position for $t {
				#[inline]
				fn to_index(self) -> Option<usize> {
					usize::try_from(self).ok()
				}

				#[inline]
				fn widen(self) -> i128 {
					// Every implementor is at most 64 bits wide.
					i128::try_from(self).unwrap_or(i128::MAX)
				}
			}
		)*
	};
}

/// An integer that may name a slot of an array.
pub trait Position: Copy {
	/// Returns the value as an index, if it is representable as one.
	fn to_index(self) -> Option<usize>;

	/// Returns the value widened losslessly, used for error reporting.
	fn widen(self) -> i128;
}

impl_position!(usize, u64, u32, u16, u8);
impl_position!(isize, i64, i32, i16, i8);
