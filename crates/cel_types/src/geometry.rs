//! Immutable geometric primitives in integral pixels with a top-left origin.

use std::fmt;

use serde::Serialize;

use crate::{error::AtlasError, int::Int};

/// Validates one raw component, reporting the field name on failure.
fn component(field: &'static str, value: f64) -> Result<Int, AtlasError> {
	Int::assert_int(value).map_err(|_| AtlasError::InvalidGeometry {
		field,
		value,
	})
}

/// Cartesian coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
	x: Int,
	y: Int,
}

impl Point {
	/// Creates a point from validated components.
	pub const fn new(x: Int, y: Int) -> Self {
		Self {
			x,
			y,
		}
	}

	/// Creates a point from raw components.
	///
	/// # Errors
	///
	/// Returns [`AtlasError::InvalidGeometry`] if either component is not an [`Int`].
	pub fn from_f64(x: f64, y: f64) -> Result<Self, AtlasError> {
		Ok(Self::new(component("x", x)?, component("y", y)?))
	}

	/// Horizontal coordinate
	pub const fn x(&self) -> Int {
		self.x
	}

	/// Vertical coordinate
	pub const fn y(&self) -> Int {
		self.y
	}
}

/// Width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
	w: Int,
	h: Int,
}

impl Size {
	/// Creates a size from validated components.
	pub const fn new(w: Int, h: Int) -> Self {
		Self {
			w,
			h,
		}
	}

	/// Creates a size from raw components.
	///
	/// # Errors
	///
	/// Returns [`AtlasError::InvalidGeometry`] if either component is not an [`Int`].
	pub fn from_f64(w: f64, h: f64) -> Result<Self, AtlasError> {
		Ok(Self::new(component("w", w)?, component("h", h)?))
	}

	/// Width
	pub const fn w(&self) -> Int {
		self.w
	}

	/// Height
	pub const fn h(&self) -> Int {
		self.h
	}
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
	x: Int,
	y: Int,
	w: Int,
	h: Int,
}

impl Rect {
	/// Creates a rectangle from an origin and a size.
	pub const fn new(position: Point, size: Size) -> Self {
		Self {
			x: position.x,
			y: position.y,
			w: size.w,
			h: size.h,
		}
	}

	/// Creates a rectangle from raw components.
	///
	/// # Errors
	///
	/// Returns [`AtlasError::InvalidGeometry`] if any component is not an [`Int`].
	pub fn from_f64(x: f64, y: f64, w: f64, h: f64) -> Result<Self, AtlasError> {
		Ok(Self::new(Point::from_f64(x, y)?, Size::from_f64(w, h)?))
	}

	/// Horizontal origin
	pub const fn x(&self) -> Int {
		self.x
	}

	/// Vertical origin
	pub const fn y(&self) -> Int {
		self.y
	}

	/// Width
	pub const fn w(&self) -> Int {
		self.w
	}

	/// Height
	pub const fn h(&self) -> Int {
		self.h
	}

	/// Top-left corner
	pub const fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Dimensions
	pub const fn size(&self) -> Size {
		Size::new(self.w, self.h)
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.w, self.h)
	}
}

impl fmt::Display for Rect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.position(), self.size())
	}
}
