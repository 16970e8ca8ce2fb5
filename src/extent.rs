//! A module containing [`Extent`].

use core::fmt;
use core::ops::{Bound, RangeBounds};

use crate::error::Parameter;
use crate::utils::{check_ordered, cmp_point_with_extent};
use crate::{Bounded, Inclusion, InvalidArgument};

/// An immutable interval `from..to` over an [`Ord`] point type `T`, with
/// each boundary independently included or excluded according to an
/// [`Inclusion`].
///
/// Every live `Extent` has `from <= to`. Nothing mutates an `Extent` after
/// construction, the `with_*` methods and [`Extent::inclusive()`] and
/// [`Extent::exclusive()`] all return new extents.
///
/// Two extents are equal when their policies are the same and their
/// boundaries are equal, and [`Hash`] agrees with that.
///
/// # Examples
/// ```
/// use extent::{Extent, Inclusion};
///
/// let extent = Extent::new(0, 100, Inclusion::Inclusive).unwrap();
/// let narrowed = extent
/// 	.with_effective_from(1)
/// 	.unwrap()
/// 	.with_effective_to(15)
/// 	.unwrap()
/// 	.exclusive();
///
/// assert_eq!(narrowed, Extent::new(1, 15, Inclusion::Exclusive).unwrap());
/// assert_eq!(narrowed.is_in_range(&1), false);
/// assert_eq!(narrowed.is_in_range(&14), true);
///
/// // the original is untouched
/// assert_eq!(extent.is_in_range(&0), true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent<T> {
	from: T,
	to: T,
	inclusion: Inclusion,
}

impl<T> Extent<T>
where
	T: Ord,
{
	/// Creates a new extent from `from` to `to` with the given boundary
	/// policy.
	///
	/// Returns an [`InvalidArgument`] naming `to` if `from` is ordered
	/// after `to`.
	///
	/// # Examples
	/// ```
	/// use extent::{Extent, Inclusion, Parameter};
	///
	/// assert!(Extent::new("Alpha", "Bravo", Inclusion::Inclusive).is_ok());
	///
	/// let error = Extent::new("Bravo", "Alpha", Inclusion::Inclusive)
	/// 	.unwrap_err();
	/// assert_eq!(error.parameter, Parameter::To);
	/// ```
	pub fn new(
		from: T,
		to: T,
		inclusion: Inclusion,
	) -> Result<Self, InvalidArgument> {
		check_ordered(&from, &to)?;
		Ok(Extent {
			from,
			to,
			inclusion,
		})
	}

	/// The start point of the extent.
	pub fn from(&self) -> &T {
		&self.from
	}

	/// The end point of the extent.
	pub fn to(&self) -> &T {
		&self.to
	}

	/// The boundary policy of the extent.
	pub fn inclusion(&self) -> Inclusion {
		self.inclusion
	}

	/// Returns `true` if [`Extent::from()`] is part of the extent.
	pub fn includes_start(&self) -> bool {
		self.inclusion.includes_start()
	}

	/// Returns `true` if [`Extent::to()`] is part of the extent.
	pub fn includes_end(&self) -> bool {
		self.inclusion.includes_end()
	}

	/// Returns `true` if both boundaries are part of the extent.
	pub fn is_inclusive(&self) -> bool {
		self.inclusion.is_inclusive()
	}

	/// Returns `true` if `value` lies within the extent, respecting the
	/// boundary policy.
	///
	/// A zero-width extent with [`Inclusion::Exclusive`] contains nothing.
	///
	/// # Examples
	/// ```
	/// use extent::{Extent, Inclusion};
	///
	/// let extent = Extent::new(1, 5, Inclusion::IncludeEnd).unwrap();
	///
	/// assert_eq!(extent.is_in_range(&1), false);
	/// assert_eq!(extent.is_in_range(&3), true);
	/// assert_eq!(extent.is_in_range(&5), true);
	/// assert_eq!(extent.is_in_range(&6), false);
	/// ```
	pub fn is_in_range(&self, value: &T) -> bool {
		cmp_point_with_extent(value, &self.from, &self.to, self.inclusion)
			.is_eq()
	}

	/// Decomposes the extent into `(from, to, inclusion)`.
	pub fn into_parts(self) -> (T, T, Inclusion) {
		(self.from, self.to, self.inclusion)
	}
}

impl<T> Extent<T>
where
	T: Ord + Clone,
{
	/// Returns a new extent starting at `from` with this extent's end and
	/// policy.
	///
	/// Returns an [`InvalidArgument`] if `from` is after this extent's end.
	pub fn with_effective_from(
		&self,
		from: T,
	) -> Result<Self, InvalidArgument> {
		Extent::new(from, self.to.clone(), self.inclusion)
	}

	/// Returns a new extent ending at `to` with this extent's start and
	/// policy.
	///
	/// Returns an [`InvalidArgument`] if `to` is before this extent's
	/// start.
	pub fn with_effective_to(&self, to: T) -> Result<Self, InvalidArgument> {
		Extent::new(self.from.clone(), to, self.inclusion)
	}

	/// Returns a new extent with the same boundaries and the given policy.
	pub fn with_inclusion(&self, inclusion: Inclusion) -> Self {
		Extent {
			from: self.from.clone(),
			to: self.to.clone(),
			inclusion,
		}
	}

	/// Returns a new extent with the same boundaries which includes both.
	pub fn inclusive(&self) -> Self {
		self.with_inclusion(Inclusion::Inclusive)
	}

	/// Returns a new extent with the same boundaries which excludes both.
	pub fn exclusive(&self) -> Self {
		self.with_inclusion(Inclusion::Exclusive)
	}
}

impl<T> Extent<T>
where
	T: Ord + Bounded,
{
	/// The inclusive extent covering every value of `T`.
	///
	/// # Examples
	/// ```
	/// use extent::Extent;
	///
	/// let forever = Extent::<u8>::forever();
	///
	/// assert_eq!(forever.is_in_range(&0), true);
	/// assert_eq!(forever.is_in_range(&u8::MAX), true);
	/// ```
	pub fn forever() -> Self {
		Extent {
			from: T::MIN,
			to: T::MAX,
			inclusion: Inclusion::Inclusive,
		}
	}
}

impl<T> RangeBounds<T> for Extent<T> {
	fn start_bound(&self) -> Bound<&T> {
		self.inclusion.start_bound(&self.from)
	}

	fn end_bound(&self) -> Bound<&T> {
		self.inclusion.end_bound(&self.to)
	}
}

/// Builds an extent from a pair of std [`Bound`]s.
///
/// [`Bound::Unbounded`] stands for a missing boundary and is rejected with
/// [`Reason::Missing`](crate::Reason::Missing).
///
/// # Examples
/// ```
/// use std::ops::Bound;
///
/// use extent::{Extent, Inclusion, Parameter};
///
/// let extent =
/// 	Extent::try_from((Bound::Included(2), Bound::Excluded(8))).unwrap();
/// assert_eq!(extent.inclusion(), Inclusion::IncludeStart);
///
/// let error = Extent::try_from((Bound::Included(2), Bound::Unbounded))
/// 	.unwrap_err();
/// assert_eq!(error.parameter, Parameter::To);
/// ```
impl<T> TryFrom<(Bound<T>, Bound<T>)> for Extent<T>
where
	T: Ord,
{
	type Error = InvalidArgument;

	fn try_from(
		(start_bound, end_bound): (Bound<T>, Bound<T>),
	) -> Result<Self, Self::Error> {
		let (from, include_start) = match start_bound {
			Bound::Included(from) => (from, true),
			Bound::Excluded(from) => (from, false),
			Bound::Unbounded => {
				return Err(InvalidArgument::missing(Parameter::From));
			}
		};
		let (to, include_end) = match end_bound {
			Bound::Included(to) => (to, true),
			Bound::Excluded(to) => (to, false),
			Bound::Unbounded => {
				return Err(InvalidArgument::missing(Parameter::To));
			}
		};
		Extent::new(from, to, Inclusion::from_flags(include_start, include_end))
	}
}

impl<T> fmt::Display for Extent<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} to {} ({})", self.from, self.to, self.inclusion)
	}
}

#[cfg(feature = "serde")]
mod serde_impls {
	use serde::de::Error;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Extent, Inclusion};

	#[derive(Serialize)]
	struct ExtentRef<'a, T> {
		from: &'a T,
		to: &'a T,
		inclusion: Inclusion,
	}

	#[derive(Deserialize)]
	struct ExtentOwned<T> {
		from: T,
		to: T,
		inclusion: Inclusion,
	}

	impl<T> Serialize for Extent<T>
	where
		T: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			ExtentRef {
				from: &self.from,
				to: &self.to,
				inclusion: self.inclusion,
			}
			.serialize(serializer)
		}
	}

	impl<'de, T> Deserialize<'de> for Extent<T>
	where
		T: Ord + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let ExtentOwned {
				from,
				to,
				inclusion,
			} = ExtentOwned::deserialize(deserializer)?;
			Extent::new(from, to, inclusion).map_err(D::Error::custom)
		}
	}
}
