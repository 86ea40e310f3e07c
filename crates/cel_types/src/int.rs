//! Bounded integer type.
//!
//! Every coordinate, dimension, duration and playback period in an atlas is an
//! [`Int`]: a whole number in the "safe integer" range
//! `[-(2^53 - 1), 2^53 - 1]`. Values in this range are exactly representable as
//! `f64`, so conversions between the JSON number domain and `Int` never lose
//! precision.
//!
//! # Examples
//!
//! ```
//! use cel_types::Int;
//!
//! // Truncates toward zero.
//! assert_eq!(Int::from_f64(7.0 / 2.0).unwrap().get(), 3);
//! assert_eq!(Int::from_f64(-3.9).unwrap().get(), -3);
//!
//! // Saturates at the range bounds.
//! assert_eq!(Int::from_f64(f64::INFINITY).unwrap(), Int::MAX);
//!
//! // Only integral values pass validation.
//! assert!(Int::is_int(2.0));
//! assert!(!Int::is_int(2.5));
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::IntError;

/// Largest magnitude representable by an [`Int`] (`2^53 - 1`)
pub const MAX_SAFE_INTEGER: i64 = 0x1f_ffff_ffff_ffff;

/// A whole number constrained to `[-MAX_SAFE_INTEGER, MAX_SAFE_INTEGER]`.
///
/// There is no unchecked conversion from a raw primitive wider than `i32`;
/// every other path validates or saturates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Int(i64);

impl Int {
	/// Largest `Int`
	pub const MAX: Self = Self(MAX_SAFE_INTEGER);

	/// Smallest `Int`
	pub const MIN: Self = Self(-MAX_SAFE_INTEGER);

	/// Zero
	pub const ZERO: Self = Self(0);

	/// Creates an `Int` from an `i64`, returning `None` when out of range.
	pub const fn new(value: i64) -> Option<Self> {
		if value < -MAX_SAFE_INTEGER || value > MAX_SAFE_INTEGER {
			None
		} else {
			Some(Self(value))
		}
	}

	/// Truncates `value` toward zero, saturating at the range bounds.
	///
	/// # Errors
	///
	/// Returns [`IntError::NotANumber`] if `value` is NaN.
	pub fn from_f64(value: f64) -> Result<Self, IntError> {
		if value.is_nan() {
			return Err(IntError::NotANumber);
		}
		if value >= MAX_SAFE_INTEGER as f64 {
			return Ok(Self::MAX);
		}
		if value <= -MAX_SAFE_INTEGER as f64 {
			return Ok(Self::MIN);
		}
		Ok(Self(value.trunc() as i64))
	}

	/// Returns `true` if `value` is already an integer within range.
	pub fn is_int(value: f64) -> bool {
		matches!(Self::from_f64(value), Ok(int) if int.0 as f64 == value)
	}

	/// Converts `value` without truncation or saturation.
	///
	/// # Errors
	///
	/// Returns [`IntError::NotAnInteger`] if [`Int::is_int`] is false.
	pub fn assert_int(value: f64) -> Result<Self, IntError> {
		if Self::is_int(value) {
			Ok(Self(value as i64))
		} else {
			Err(IntError::NotAnInteger(value))
		}
	}

	/// Clamps a wide intermediate result into range.
	pub(crate) fn saturate(value: i128) -> Self {
		Self(value.clamp(-i128::from(MAX_SAFE_INTEGER), i128::from(MAX_SAFE_INTEGER)) as i64)
	}

	/// Returns the underlying value.
	pub const fn get(self) -> i64 {
		self.0
	}

	/// Returns the value as a float. Always exact.
	pub const fn as_f64(self) -> f64 {
		self.0 as f64
	}

	/// Adds two values, returning `None` if the result leaves the range.
	pub fn checked_add(self, rhs: Self) -> Option<Self> {
		i64::try_from(i128::from(self.0) + i128::from(rhs.0)).ok().and_then(Self::new)
	}

	/// Subtracts two values, returning `None` if the result leaves the range.
	pub fn checked_sub(self, rhs: Self) -> Option<Self> {
		i64::try_from(i128::from(self.0) - i128::from(rhs.0)).ok().and_then(Self::new)
	}

	/// Adds two values, saturating at the range bounds.
	pub fn saturating_add(self, rhs: Self) -> Self {
		Self::saturate(i128::from(self.0) + i128::from(rhs.0))
	}

	/// Subtracts two values, saturating at the range bounds.
	pub fn saturating_sub(self, rhs: Self) -> Self {
		Self::saturate(i128::from(self.0) - i128::from(rhs.0))
	}
}

impl From<i32> for Int {
	fn from(value: i32) -> Self {
		Self(i64::from(value))
	}
}

impl From<u32> for Int {
	fn from(value: u32) -> Self {
		Self(i64::from(value))
	}
}

impl From<u16> for Int {
	fn from(value: u16) -> Self {
		Self(i64::from(value))
	}
}

impl From<u8> for Int {
	fn from(value: u8) -> Self {
		Self(i64::from(value))
	}
}

impl TryFrom<i64> for Int {
	type Error = IntError;

	fn try_from(value: i64) -> Result<Self, Self::Error> {
		Self::new(value).ok_or(IntError::NotAnInteger(value as f64))
	}
}

impl TryFrom<f64> for Int {
	type Error = IntError;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		Self::assert_int(value)
	}
}

impl From<Int> for i64 {
	fn from(value: Int) -> Self {
		value.0
	}
}

impl From<Int> for f64 {
	fn from(value: Int) -> Self {
		value.as_f64()
	}
}

impl fmt::Display for Int {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
