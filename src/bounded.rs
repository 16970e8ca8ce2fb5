//! A module containing the [`Bounded`] trait and trait impls for the
//! primitive integer datatypes and [`NaiveDate`].

use chrono::NaiveDate;

/// A trait for point types with a finite smallest and largest value.
///
/// Types implementing this can build the "forever" extent spanning every
/// representable value with [`Extent::forever()`].
///
/// [`Extent::forever()`]: crate::Extent::forever
pub trait Bounded {
	/// The minimum value of the type.
	const MIN: Self;
	/// The maximum value of the type.
	const MAX: Self;
}

macro_rules! bounded {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Bounded for $ident {
			const MIN: Self = $ident::MIN;
			const MAX: Self = $ident::MAX;
		}

		bounded!($($t)*);
	};
}

bounded!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,);

impl Bounded for NaiveDate {
	const MIN: Self = NaiveDate::MIN;
	const MAX: Self = NaiveDate::MAX;
}
