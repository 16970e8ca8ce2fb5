//! A module containing [`Inclusion`], the boundary policy attached to every
//! extent.

use core::fmt;
use core::ops::Bound;

/// Whether the start and/or end point of an extent belongs to the extent.
///
/// Only four combinations exist so this is a closed enum rather than an
/// open-ended flags type, but it still converts to and from the two-bit
/// flag encoding (`IncludeStart = 1`, `IncludeEnd = 2`) via
/// [`Inclusion::bits()`] and [`Inclusion::from_bits()`].
///
/// # Examples
/// ```
/// use extent::Inclusion;
///
/// assert_eq!(Inclusion::from_flags(true, true), Inclusion::Inclusive);
/// assert_eq!(Inclusion::IncludeEnd.includes_start(), false);
/// assert_eq!(Inclusion::IncludeEnd.includes_end(), true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inclusion {
	/// Neither boundary is part of the extent.
	Exclusive,
	/// Only the start boundary is part of the extent.
	IncludeStart,
	/// Only the end boundary is part of the extent.
	IncludeEnd,
	/// Both boundaries are part of the extent.
	#[default]
	Inclusive,
}

impl Inclusion {
	const START_BIT: u8 = 1 << 0;
	const END_BIT: u8 = 1 << 1;

	/// Builds the policy from its two independent flags.
	pub const fn from_flags(include_start: bool, include_end: bool) -> Self {
		match (include_start, include_end) {
			(false, false) => Inclusion::Exclusive,
			(true, false) => Inclusion::IncludeStart,
			(false, true) => Inclusion::IncludeEnd,
			(true, true) => Inclusion::Inclusive,
		}
	}

	/// Decodes the two-bit flag encoding, returning `None` if any bit
	/// other than the start and end bits is set.
	///
	/// # Examples
	/// ```
	/// use extent::Inclusion;
	///
	/// assert_eq!(Inclusion::from_bits(0b01), Some(Inclusion::IncludeStart));
	/// assert_eq!(Inclusion::from_bits(0b100), None);
	/// ```
	pub const fn from_bits(bits: u8) -> Option<Self> {
		if bits & !(Self::START_BIT | Self::END_BIT) != 0 {
			return None;
		}
		Some(Self::from_flags(
			bits & Self::START_BIT != 0,
			bits & Self::END_BIT != 0,
		))
	}

	/// The two-bit flag encoding of the policy.
	pub const fn bits(self) -> u8 {
		let mut bits = 0;
		if self.includes_start() {
			bits |= Self::START_BIT;
		}
		if self.includes_end() {
			bits |= Self::END_BIT;
		}
		bits
	}

	/// Returns `true` if the start boundary is part of the extent.
	pub const fn includes_start(self) -> bool {
		matches!(self, Inclusion::IncludeStart | Inclusion::Inclusive)
	}

	/// Returns `true` if the end boundary is part of the extent.
	pub const fn includes_end(self) -> bool {
		matches!(self, Inclusion::IncludeEnd | Inclusion::Inclusive)
	}

	/// Returns `true` if both boundaries are part of the extent.
	pub const fn is_inclusive(self) -> bool {
		matches!(self, Inclusion::Inclusive)
	}

	/// Wraps `start` in the [`Bound`] this policy gives a start point.
	pub fn start_bound<T>(self, start: T) -> Bound<T> {
		match self.includes_start() {
			true => Bound::Included(start),
			false => Bound::Excluded(start),
		}
	}

	/// Wraps `end` in the [`Bound`] this policy gives an end point.
	pub fn end_bound<T>(self, end: T) -> Bound<T> {
		match self.includes_end() {
			true => Bound::Included(end),
			false => Bound::Excluded(end),
		}
	}

	/// The name of the policy, as used in the textual rendering of
	/// extents.
	pub const fn name(self) -> &'static str {
		match self {
			Inclusion::Exclusive => "Exclusive",
			Inclusion::IncludeStart => "IncludeStart",
			Inclusion::IncludeEnd => "IncludeEnd",
			Inclusion::Inclusive => "Inclusive",
		}
	}
}

impl fmt::Display for Inclusion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
