//! This crate provides [`Extent`], an immutable bounded interval over any
//! [`Ord`] point type, and [`DateRange`], its specialization for calendar
//! dates.
//!
//! ## Example using an Extent
//!
//! ```rust
//! use extent::{Extent, Inclusion};
//!
//! let extent = Extent::new(0, 10, Inclusion::IncludeStart).unwrap();
//!
//! assert_eq!(extent.is_in_range(&0), true);
//! assert_eq!(extent.is_in_range(&10), false);
//! assert_eq!(extent.inclusive().is_in_range(&10), true);
//! ```
//!
//! ## Example using a DateRange
//!
//! ```rust
//! use chrono::NaiveDate;
//! use extent::{DateRange, Inclusion};
//!
//! let from = NaiveDate::from_ymd_opt(2017, 10, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2017, 11, 1).unwrap();
//!
//! let range = DateRange::new(from, to, Inclusion::Inclusive).unwrap();
//!
//! assert_eq!(range.elapsed_days(), 32);
//! assert_eq!(range.exclusive().elapsed_days(), 30);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Inclusion
//!
//! Every extent carries an [`Inclusion`] saying whether its start point
//! and its end point are part of it. The four combinations are all valid
//! and all distinct: `Exclusive`, `IncludeStart`, `IncludeEnd` and
//! `Inclusive`.
//!
//! ### Valid Extents
//!
//! An extent is valid if its start is not ordered after its end. Zero-width
//! extents such as `4 to 4` are valid under every policy, even though an
//! `Exclusive` zero-width extent contains no points at all.
//!
//! Constructors return an [`InvalidArgument`] instead of building an
//! invalid extent, and this is the only error in the crate.
//!
//! ### Immutability
//!
//! Extents are values. The `with_*` builder methods,
//! [`Extent::inclusive()`] and [`Extent::exclusive()`] return new extents
//! and leave the original alone, so extents can be shared freely between
//! threads.
//!
//! ### Day Granularity
//!
//! [`DateRange`] truncates everything it is given to a [`NaiveDate`],
//! through the [`IntoDate`] trait, before comparing or storing it. The
//! number of days a range spans depends on its policy, see
//! [`DateRange::elapsed_days()`].
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Inclusion`],
//!   [`Extent`] and [`DateRange`]. Deserialization validates the extent.
//!
//! [`NaiveDate`]: chrono::NaiveDate

#![allow(clippy::tabs_in_doc_comments)]

#[cfg(test)]
pub(crate) mod test_extents;
pub(crate) mod utils;

pub mod bounded;
pub mod date_range;
pub mod error;
pub mod extent;
pub mod inclusion;

pub use crate::bounded::Bounded;
pub use crate::date_range::{DateRange, DateRangeExt, IntoDate};
pub use crate::error::{InvalidArgument, Parameter, Reason};
pub use crate::extent::Extent;
pub use crate::inclusion::Inclusion;
