//! Millisecond durations that may hold forever.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::int::Int;

/// A duration in whole milliseconds, or positive infinity.
///
/// Infinity absorbs addition, so the total of a sequence containing an
/// infinite cel is itself infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Millis {
	/// Finite duration
	Finite(Int),
	/// Hold forever
	Infinite,
}

impl Millis {
	/// Zero milliseconds
	pub const ZERO: Self = Self::Finite(Int::ZERO);

	/// Returns `true` for [`Millis::Infinite`].
	pub const fn is_infinite(self) -> bool {
		matches!(self, Self::Infinite)
	}

	/// Returns the finite value, if any.
	pub const fn finite(self) -> Option<Int> {
		match self {
			Self::Finite(ms) => Some(ms),
			Self::Infinite => None,
		}
	}

	/// Returns the duration as a float, infinity included.
	pub const fn as_f64(self) -> f64 {
		match self {
			Self::Finite(ms) => ms.as_f64(),
			Self::Infinite => f64::INFINITY,
		}
	}

	/// Adds two durations, returning `None` if a finite sum leaves the
	/// [`Int`] range.
	pub fn checked_add(self, rhs: Self) -> Option<Self> {
		match (self, rhs) {
			(Self::Finite(a), Self::Finite(b)) => a.checked_add(b).map(Self::Finite),
			_ => Some(Self::Infinite),
		}
	}
}

impl Default for Millis {
	fn default() -> Self {
		Self::ZERO
	}
}

impl From<Int> for Millis {
	fn from(value: Int) -> Self {
		Self::Finite(value)
	}
}

impl Serialize for Millis {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Finite(ms) => serializer.serialize_i64(ms.get()),
			Self::Infinite => serializer.serialize_str("infinite"),
		}
	}
}

impl fmt::Display for Millis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Finite(ms) => write!(f, "{ms}ms"),
			Self::Infinite => write!(f, "∞"),
		}
	}
}
