use core::cmp::Ordering;

use crate::{Inclusion, InvalidArgument};

/// Where `point` lies relative to the extent `from..to` under `inclusion`.
///
/// An excluded boundary point compares as outside, on the side of the
/// boundary it sits on.
pub(crate) fn cmp_point_with_extent<T>(
	point: &T,
	from: &T,
	to: &T,
	inclusion: Inclusion,
) -> Ordering
where
	T: Ord,
{
	match point.cmp(from) {
		Ordering::Less => return Ordering::Less,
		Ordering::Equal if !inclusion.includes_start() => return Ordering::Less,
		_ => {}
	}
	match point.cmp(to) {
		Ordering::Greater => Ordering::Greater,
		Ordering::Equal if !inclusion.includes_end() => Ordering::Greater,
		_ => Ordering::Equal,
	}
}

pub(crate) fn check_ordered<T>(from: &T, to: &T) -> Result<(), InvalidArgument>
where
	T: Ord,
{
	match from.cmp(to) {
		Ordering::Greater => Err(InvalidArgument::from_after_to()),
		_ => Ok(()),
	}
}
