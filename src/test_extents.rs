use chrono::NaiveDate;

use crate::{Extent, Inclusion};

pub(crate) const ALL_INCLUSIONS: [Inclusion; 4] = [
	Inclusion::Exclusive,
	Inclusion::IncludeStart,
	Inclusion::IncludeEnd,
	Inclusion::Inclusive,
];

/// An included-included extent
pub(crate) fn ii(x1: i8, x2: i8) -> Extent<i8> {
	Extent::new(x1, x2, Inclusion::Inclusive).unwrap()
}
/// An included-excluded extent
pub(crate) fn ie(x1: i8, x2: i8) -> Extent<i8> {
	Extent::new(x1, x2, Inclusion::IncludeStart).unwrap()
}
/// An excluded-included extent
pub(crate) fn ei(x1: i8, x2: i8) -> Extent<i8> {
	Extent::new(x1, x2, Inclusion::IncludeEnd).unwrap()
}
/// An excluded-excluded extent
pub(crate) fn ee(x1: i8, x2: i8) -> Extent<i8> {
	Extent::new(x1, x2, Inclusion::Exclusive).unwrap()
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
