//! A module containing [`InvalidArgument`], the only error this crate
//! returns.

use core::fmt;

use thiserror::Error;

/// The constructor parameter an [`InvalidArgument`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
	/// The start point of the extent.
	From,
	/// The end point of the extent.
	To,
}

impl fmt::Display for Parameter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Parameter::From => "from",
			Parameter::To => "to",
		})
	}
}

/// Why a constructor parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
	/// The boundary was not given.
	Missing,
	/// `from` was ordered strictly after `to`.
	FromAfterTo,
}

impl fmt::Display for Reason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Reason::Missing => "cannot be missing",
			Reason::FromAfterTo => "from must not be after to",
		})
	}
}

/// The error returned when an extent is constructed from boundaries that
/// violate its invariants. No extent is created when this is returned.
///
/// # Examples
/// ```
/// use extent::{Extent, Inclusion, InvalidArgument, Parameter, Reason};
///
/// assert_eq!(
/// 	Extent::new(9, 1, Inclusion::Inclusive),
/// 	Err(InvalidArgument {
/// 		parameter: Parameter::To,
/// 		reason: Reason::FromAfterTo,
/// 	})
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid argument `{parameter}`: {reason}")]
pub struct InvalidArgument {
	/// The offending parameter.
	pub parameter: Parameter,
	/// What was wrong with it.
	pub reason: Reason,
}

impl InvalidArgument {
	pub(crate) const fn missing(parameter: Parameter) -> Self {
		InvalidArgument {
			parameter,
			reason: Reason::Missing,
		}
	}

	pub(crate) const fn from_after_to() -> Self {
		InvalidArgument {
			parameter: Parameter::To,
			reason: Reason::FromAfterTo,
		}
	}
}
