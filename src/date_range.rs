//! A module containing [`DateRange`], the calendar-date specialization of
//! [`Extent`], and the [`IntoDate`] conversion it accepts its inputs
//! through.

use core::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::{Extent, Inclusion, InvalidArgument};

const DATE_FORMAT: &str = "%d %b %Y";

/// Conversion to a calendar date, discarding any time-of-day.
pub trait IntoDate {
	/// The calendar date of `self`.
	fn into_date(self) -> NaiveDate;
}

impl IntoDate for NaiveDate {
	fn into_date(self) -> NaiveDate {
		self
	}
}

impl IntoDate for NaiveDateTime {
	fn into_date(self) -> NaiveDate {
		self.date()
	}
}

/// The date is taken in the value's own time zone.
impl<Tz> IntoDate for DateTime<Tz>
where
	Tz: TimeZone,
{
	fn into_date(self) -> NaiveDate {
		self.date_naive()
	}
}

/// An immutable range of calendar dates with day granularity.
///
/// This behaves exactly like an [`Extent<NaiveDate>`] except that inputs
/// are truncated to their date before anything else happens, and it can
/// count the days it spans with [`DateRange::elapsed_days()`].
///
/// The [`Default`] date range is the inclusive range from
/// [`NaiveDate::MIN`] to [`NaiveDate::MAX`].
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use extent::{DateRange, Inclusion};
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// let (from, to) = (date(2016, 2, 27), date(2016, 3, 2));
/// let range = DateRange::new(from, to, Inclusion::Inclusive).unwrap();
///
/// assert_eq!(range.elapsed_days(), 5);
/// assert_eq!(range.is_in_range(date(2016, 2, 29)), true);
/// assert_eq!(range.to_string(), "27 Feb 2016 to 02 Mar 2016 (Inclusive)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
	extent: Extent<NaiveDate>,
}

impl DateRange {
	/// Creates a new date range from the dates of `from` and `to`.
	///
	/// Both are truncated to their date first, so two date-times on the
	/// same day are accepted whatever their times of day.
	///
	/// Returns an [`InvalidArgument`] naming `to` if the date of `from` is
	/// after the date of `to`.
	///
	/// # Examples
	/// ```
	/// use chrono::NaiveDate;
	/// use extent::{DateRange, Inclusion};
	///
	/// let day = NaiveDate::from_ymd_opt(2017, 10, 1).unwrap();
	/// let evening = day.and_hms_opt(18, 0, 0).unwrap();
	/// let morning = day.and_hms_opt(6, 0, 0).unwrap();
	///
	/// let range =
	/// 	DateRange::new(evening, morning, Inclusion::Inclusive).unwrap();
	/// assert_eq!(range.from(), day);
	/// assert_eq!(range.to(), day);
	/// ```
	pub fn new<F, T>(
		from: F,
		to: T,
		inclusion: Inclusion,
	) -> Result<Self, InvalidArgument>
	where
		F: IntoDate,
		T: IntoDate,
	{
		Extent::new(from.into_date(), to.into_date(), inclusion)
			.map(|extent| DateRange { extent })
	}

	/// Wraps an existing date extent.
	pub fn from_extent(extent: Extent<NaiveDate>) -> Self {
		DateRange { extent }
	}

	/// The underlying date extent.
	pub fn as_extent(&self) -> &Extent<NaiveDate> {
		&self.extent
	}

	/// Unwraps the underlying date extent.
	pub fn into_extent(self) -> Extent<NaiveDate> {
		self.extent
	}

	/// The first date of the range.
	pub fn from(&self) -> NaiveDate {
		*self.extent.from()
	}

	/// The last date of the range.
	pub fn to(&self) -> NaiveDate {
		*self.extent.to()
	}

	/// The boundary policy of the range.
	pub fn inclusion(&self) -> Inclusion {
		self.extent.inclusion()
	}

	/// Returns `true` if [`DateRange::from()`] is part of the range.
	pub fn includes_start(&self) -> bool {
		self.extent.includes_start()
	}

	/// Returns `true` if [`DateRange::to()`] is part of the range.
	pub fn includes_end(&self) -> bool {
		self.extent.includes_end()
	}

	/// Returns `true` if both boundaries are part of the range.
	pub fn is_inclusive(&self) -> bool {
		self.extent.is_inclusive()
	}

	/// Returns `true` if the date of `value` lies within the range,
	/// respecting the boundary policy.
	///
	/// Containment is decided per day: a date-time is not compared against
	/// midnight of the boundary dates. Any time on an included boundary day
	/// is in range, and any time on an excluded boundary day is not.
	///
	/// # Examples
	/// ```
	/// use chrono::NaiveDate;
	/// use extent::{DateRange, Inclusion};
	///
	/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
	/// let (from, to) = (date(2017, 10, 1), date(2017, 11, 1));
	/// let range = DateRange::new(from, to, Inclusion::Exclusive).unwrap();
	/// let first_noon = date(2017, 10, 1).and_hms_opt(12, 0, 0).unwrap();
	///
	/// assert_eq!(range.is_in_range(first_noon), false);
	/// assert_eq!(range.inclusive().is_in_range(first_noon), true);
	/// ```
	pub fn is_in_range<D>(&self, value: D) -> bool
	where
		D: IntoDate,
	{
		self.extent.is_in_range(&value.into_date())
	}

	/// The number of whole days the range spans under its boundary
	/// policy.
	///
	/// An included start counts its own day, an included end counts its
	/// own day, and a zero-width exclusive range spans no days.
	///
	/// # Examples
	/// ```
	/// use chrono::NaiveDate;
	/// use extent::{DateRange, Inclusion};
	///
	/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
	/// let from = date(2017, 10, 30);
	/// let to = date(2017, 11, 1);
	/// let range = DateRange::new(from, to, Inclusion::Inclusive).unwrap();
	///
	/// assert_eq!(range.elapsed_days(), 3);
	/// assert_eq!(range.exclusive().elapsed_days(), 1);
	/// ```
	pub fn elapsed_days(&self) -> i64 {
		let (from, to) = (self.from(), self.to());
		if self.inclusion() == Inclusion::Exclusive && from == to {
			return 0;
		}

		// (to + end) - (from + !start), without stepping past MIN or MAX
		let mut days = to.signed_duration_since(from).num_days();
		if !self.includes_start() {
			days -= 1;
		}
		if self.includes_end() {
			days += 1;
		}
		days
	}

	/// Returns a new date range starting on the date of `from` with this
	/// range's end and policy.
	///
	/// Returns an [`InvalidArgument`] if that date is after this range's
	/// end.
	pub fn with_effective_from<D>(
		&self,
		from: D,
	) -> Result<Self, InvalidArgument>
	where
		D: IntoDate,
	{
		DateRange::new(from, self.to(), self.inclusion())
	}

	/// Returns a new date range ending on the date of `to` with this
	/// range's start and policy.
	///
	/// Returns an [`InvalidArgument`] if that date is before this range's
	/// start.
	pub fn with_effective_to<D>(&self, to: D) -> Result<Self, InvalidArgument>
	where
		D: IntoDate,
	{
		DateRange::new(self.from(), to, self.inclusion())
	}

	/// Returns a new date range with the same dates and the given policy.
	pub fn with_inclusion(&self, inclusion: Inclusion) -> Self {
		DateRange {
			extent: self.extent.with_inclusion(inclusion),
		}
	}

	/// Returns a new date range with the same dates which includes both.
	pub fn inclusive(&self) -> Self {
		self.with_inclusion(Inclusion::Inclusive)
	}

	/// Returns a new date range with the same dates which excludes both.
	pub fn exclusive(&self) -> Self {
		self.with_inclusion(Inclusion::Exclusive)
	}
}

impl Default for DateRange {
	fn default() -> Self {
		DateRange {
			extent: Extent::forever(),
		}
	}
}

impl fmt::Display for DateRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} to {} ({})",
			self.from().format(DATE_FORMAT),
			self.to().format(DATE_FORMAT),
			self.inclusion()
		)
	}
}

/// Builds a [`DateRange`] starting at `self`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use extent::{DateRange, DateRangeExt, Inclusion};
///
/// let from = NaiveDate::from_ymd_opt(2017, 9, 12).unwrap();
/// let to = NaiveDate::from_ymd_opt(2017, 10, 12).unwrap();
///
/// assert_eq!(
/// 	from.until(to, Inclusion::Inclusive),
/// 	DateRange::new(from, to, Inclusion::Inclusive)
/// );
/// ```
pub trait DateRangeExt: IntoDate + Sized {
	/// The date range from the date of `self` to the date of `to`.
	fn until<D>(
		self,
		to: D,
		inclusion: Inclusion,
	) -> Result<DateRange, InvalidArgument>
	where
		D: IntoDate,
	{
		DateRange::new(self, to, inclusion)
	}
}

impl<I> DateRangeExt for I where I: IntoDate {}

#[cfg(feature = "serde")]
mod serde_impls {
	use chrono::NaiveDate;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{DateRange, Extent};

	impl Serialize for DateRange {
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			self.extent.serialize(serializer)
		}
	}

	impl<'de> Deserialize<'de> for DateRange {
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			Extent::<NaiveDate>::deserialize(deserializer)
				.map(DateRange::from_extent)
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::hash_map::DefaultHasher;
	use std::hash::{Hash, Hasher};

	use chrono::{FixedOffset, Utc};
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_extents::{date, ALL_INCLUSIONS};
	use crate::{Parameter, Reason};

	fn range(
		from: (i32, u32, u32),
		to: (i32, u32, u32),
		inclusion: Inclusion,
	) -> DateRange {
		DateRange::new(
			date(from.0, from.1, from.2),
			date(to.0, to.1, to.2),
			inclusion,
		)
		.unwrap()
	}

	fn hash_of(range: &DateRange) -> u64 {
		let mut hasher = DefaultHasher::new();
		range.hash(&mut hasher);
		hasher.finish()
	}

	#[test]
	fn new_tests() {
		let from = date(2020, 1, 1);
		let to = date(2021, 1, 1);
		for inclusion in ALL_INCLUSIONS {
			let range = DateRange::new(from, to, inclusion).unwrap();
			assert_eq!(range.from(), from);
			assert_eq!(range.to(), to);
			assert_eq!(range.inclusion(), inclusion);
			assert_eq!(range.includes_start(), inclusion.includes_start());
			assert_eq!(range.includes_end(), inclusion.includes_end());
			assert_eq!(
				range.is_inclusive(),
				inclusion == Inclusion::Inclusive
			);
		}

		assert_eq!(
			DateRange::new(
				date(2020, 1, 1),
				date(2019, 1, 1),
				Inclusion::Inclusive
			),
			Err(InvalidArgument {
				parameter: Parameter::To,
				reason: Reason::FromAfterTo,
			})
		);
	}

	#[test]
	fn new_truncates_time_of_day() {
		let day = date(2017, 10, 1);
		let late = day.and_hms_opt(23, 59, 59).unwrap();
		let early = day.and_hms_opt(0, 0, 1).unwrap();

		let range = DateRange::new(late, early, Inclusion::Exclusive).unwrap();
		assert_eq!(range.from(), day);
		assert_eq!(range.to(), day);

		let next_morning = date(2017, 10, 2).and_hms_opt(0, 0, 0).unwrap();
		assert_eq!(
			DateRange::new(next_morning, late, Inclusion::Inclusive),
			Err(InvalidArgument::from_after_to())
		);

		let zoned = FixedOffset::east_opt(3600)
			.unwrap()
			.with_ymd_and_hms(2017, 10, 1, 12, 0, 0)
			.unwrap();
		let utc = Utc.with_ymd_and_hms(2017, 11, 1, 9, 30, 0).unwrap();
		assert_eq!(
			DateRange::new(zoned, utc, Inclusion::Inclusive),
			Ok(range_of_october())
		);
	}
	fn range_of_october() -> DateRange {
		range((2017, 10, 1), (2017, 11, 1), Inclusion::Inclusive)
	}

	#[test]
	fn default_is_forever() {
		let forever = DateRange::default();
		assert_eq!(forever.from(), NaiveDate::MIN);
		assert_eq!(forever.to(), NaiveDate::MAX);
		assert_eq!(forever.inclusion(), Inclusion::Inclusive);
		assert!(forever.is_in_range(NaiveDate::MIN));
		assert!(forever.is_in_range(date(2017, 10, 15)));
		assert!(forever.is_in_range(NaiveDate::MAX));
	}

	#[test]
	fn is_in_range_tests() {
		let from = (2017, 10, 1);
		let to = (2017, 11, 1);

		assert_is_in_range(
			range(from, to, Inclusion::Inclusive),
			[
				((2017, 9, 30), false),
				((2017, 10, 1), true),
				((2017, 10, 15), true),
				((2017, 11, 1), true),
				((2017, 11, 2), false),
			],
		);
		assert_is_in_range(
			range(from, to, Inclusion::Exclusive),
			[
				((2017, 9, 30), false),
				((2017, 10, 1), false),
				((2017, 10, 15), true),
				((2017, 11, 1), false),
				((2017, 11, 2), false),
			],
		);
		assert_is_in_range(
			range(from, to, Inclusion::IncludeStart),
			[
				((2017, 9, 30), false),
				((2017, 10, 1), true),
				((2017, 10, 15), true),
				((2017, 11, 1), false),
				((2017, 11, 2), false),
			],
		);
		assert_is_in_range(
			range(from, to, Inclusion::IncludeEnd),
			[
				((2017, 9, 30), false),
				((2017, 10, 1), false),
				((2017, 10, 15), true),
				((2017, 11, 1), true),
				((2017, 11, 2), false),
			],
		);
	}
	fn assert_is_in_range<const N: usize>(
		range: DateRange,
		probes: [((i32, u32, u32), bool); N],
	) {
		for ((y, m, d), expected) in probes {
			assert_eq!(
				range.is_in_range(date(y, m, d)),
				expected,
				"{range} containing {y}-{m}-{d}"
			);
		}
	}

	#[test]
	fn is_in_range_ignores_time_of_day() {
		let range = range_of_october();
		let last_evening = date(2017, 11, 1).and_hms_opt(22, 0, 0).unwrap();
		assert!(range.is_in_range(last_evening));
		assert!(!range
			.with_inclusion(Inclusion::IncludeStart)
			.is_in_range(last_evening));

		let first_noon = date(2017, 10, 1).and_hms_opt(12, 0, 0).unwrap();
		assert!(range.is_in_range(first_noon));
		assert!(!range.exclusive().is_in_range(first_noon));
		assert!(!range
			.with_inclusion(Inclusion::IncludeEnd)
			.is_in_range(first_noon));
	}

	#[test]
	fn elapsed_days_tests() {
		use Inclusion::*;

		let day = (2017, 10, 1);
		assert_elapsed_days(day, day, Inclusive, 1);
		assert_elapsed_days(day, day, Exclusive, 0);
		assert_elapsed_days(day, day, IncludeStart, 0);
		assert_elapsed_days(day, day, IncludeEnd, 0);

		//across a month boundary
		let (from, to) = ((2017, 10, 30), (2017, 11, 1));
		assert_elapsed_days(from, to, Inclusive, 3);
		assert_elapsed_days(from, to, IncludeStart, 2);
		assert_elapsed_days(from, to, IncludeEnd, 2);
		assert_elapsed_days(from, to, Exclusive, 1);

		//leap and non-leap februaries
		assert_elapsed_days((2016, 2, 27), (2016, 3, 2), Inclusive, 5);
		assert_elapsed_days((2017, 2, 27), (2017, 3, 2), Inclusive, 4);
		assert_elapsed_days((2000, 2, 28), (2000, 3, 1), Inclusive, 3);
		assert_elapsed_days((1900, 2, 28), (1900, 3, 1), Inclusive, 2);

		//30 and 31 day months
		assert_elapsed_days((2017, 4, 1), (2017, 4, 30), Inclusive, 30);
		assert_elapsed_days((2017, 5, 1), (2017, 5, 31), Inclusive, 31);
		assert_elapsed_days((2016, 1, 1), (2016, 12, 31), Inclusive, 366);
		assert_elapsed_days((2017, 1, 1), (2018, 1, 1), IncludeStart, 365);
	}
	fn assert_elapsed_days(
		from: (i32, u32, u32),
		to: (i32, u32, u32),
		inclusion: Inclusion,
		expected: i64,
	) {
		let range = range(from, to, inclusion);
		assert_eq!(range.elapsed_days(), expected, "{range}");
	}

	#[test]
	fn elapsed_days_at_the_limits_of_time() {
		let forever = DateRange::default();
		let span = NaiveDate::MAX
			.signed_duration_since(NaiveDate::MIN)
			.num_days();
		assert_eq!(forever.elapsed_days(), span + 1);
		assert_eq!(forever.exclusive().elapsed_days(), span - 1);
	}

	#[test]
	fn builder_tests() {
		let base = DateRange::default();

		assert_eq!(
			base.with_effective_from(date(2017, 10, 1))
				.unwrap()
				.with_effective_to(date(2017, 11, 1))
				.unwrap()
				.inclusive(),
			range_of_october()
		);
		assert_eq!(
			base.with_effective_from(date(2017, 10, 1))
				.unwrap()
				.with_effective_to(date(2017, 11, 1))
				.unwrap()
				.exclusive(),
			range((2017, 10, 1), (2017, 11, 1), Inclusion::Exclusive)
		);

		let october = range_of_october();
		assert_eq!(
			october.with_effective_from(date(2017, 11, 2)),
			Err(InvalidArgument::from_after_to())
		);
		assert_eq!(
			october.with_effective_to(date(2017, 9, 30)),
			Err(InvalidArgument::from_after_to())
		);
		//time of day is dropped by the builders too
		assert_eq!(
			october
				.with_effective_to(
					date(2017, 11, 1).and_hms_opt(8, 0, 0).unwrap()
				)
				.unwrap(),
			october
		);
	}

	#[test]
	fn builder_leaves_receiver_untouched() {
		let october = range_of_october();
		let snapshot = (october.from(), october.to(), october.inclusion());

		let _ = october.with_effective_from(date(2017, 10, 10));
		let _ = october.with_effective_to(date(2017, 10, 20));
		let _ = october.exclusive();
		let _ = october.with_inclusion(Inclusion::IncludeEnd);

		assert_eq!(
			(october.from(), october.to(), october.inclusion()),
			snapshot
		);
	}

	#[test]
	fn equality_tests() {
		let may_to_july = ((2017, 5, 1), (2017, 7, 1));
		assert_equality(
			(may_to_july.0, may_to_july.1, Inclusion::Inclusive),
			(may_to_july.0, may_to_july.1, Inclusion::Inclusive),
			true,
		);
		assert_equality(
			((2017, 1, 19), (2017, 7, 1), Inclusion::Inclusive),
			(may_to_july.0, may_to_july.1, Inclusion::Inclusive),
			false,
		);
		assert_equality(
			(may_to_july.0, may_to_july.1, Inclusion::Inclusive),
			((2017, 5, 1), (2017, 11, 9), Inclusion::Inclusive),
			false,
		);
		assert_equality(
			(may_to_july.0, may_to_july.1, Inclusion::Inclusive),
			(may_to_july.0, may_to_july.1, Inclusion::Exclusive),
			false,
		);
		assert_equality(
			((2017, 1, 1), (2017, 2, 1), Inclusion::Inclusive),
			(may_to_july.0, may_to_july.1, Inclusion::Exclusive),
			false,
		);
	}
	fn assert_equality(
		lhs: ((i32, u32, u32), (i32, u32, u32), Inclusion),
		rhs: ((i32, u32, u32), (i32, u32, u32), Inclusion),
		expected: bool,
	) {
		let lhs = range(lhs.0, lhs.1, lhs.2);
		let rhs = range(rhs.0, rhs.1, rhs.2);

		assert_eq!(lhs == rhs, expected);
		assert_eq!(rhs == lhs, expected);
		assert_eq!(lhs != rhs, !expected);
		assert_eq!(Some(lhs) == None, false);
		if expected {
			assert_eq!(hash_of(&lhs), hash_of(&rhs));
		}
	}

	#[test]
	fn display_tests() {
		assert_eq!(
			range_of_october().to_string(),
			"01 Oct 2017 to 01 Nov 2017 (Inclusive)"
		);
		assert_eq!(
			range((2017, 9, 12), (2017, 10, 12), Inclusion::IncludeEnd)
				.to_string(),
			"12 Sep 2017 to 12 Oct 2017 (IncludeEnd)"
		);
	}

	#[test]
	fn until_tests() {
		assert_eq!(
			date(2017, 10, 1).until(date(2017, 11, 1), Inclusion::Inclusive),
			Ok(range_of_october())
		);
		assert_eq!(
			date(2017, 11, 1).until(date(2017, 10, 1), Inclusion::Inclusive),
			Err(InvalidArgument::from_after_to())
		);
	}

	#[test]
	fn extent_conversion_tests() {
		let october = range_of_october();
		let extent = october.into_extent();
		assert_eq!(extent.from(), &date(2017, 10, 1));
		assert_eq!(october.as_extent(), &extent);
		assert_eq!(DateRange::from_extent(extent), october);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_tests() {
		let output = serde_json::to_string(&range_of_october()).unwrap();
		assert_eq!(
			output,
			r#"{"from":"2017-10-01","to":"2017-11-01","inclusion":"Inclusive"}"#
		);
		let input: DateRange = serde_json::from_str(&output).unwrap();
		assert_eq!(input, range_of_october());

		let invalid = concat!(
			r#"{"from":"2017-11-01","to":"2017-10-01","#,
			r#""inclusion":"Inclusive"}"#
		);
		assert!(serde_json::from_str::<DateRange>(invalid).is_err());
	}
}
