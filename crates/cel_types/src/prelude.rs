//! Prelude module for `cel_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```
//! use cel_types::prelude::*;
//!
//! let animator = Animator::with_state(Int::ZERO, 0.0);
//! assert_eq!(animator.period, Int::ZERO);
//! ```

#[doc(inline)]
pub use crate::{
	// Model
	Animation,
	// Playback
	Animator,
	Atlas,
	// Errors
	AtlasError,
	Cel,
	Direction,
	// Numbers
	Int,
	IntError,
	Millis,
	// Configuration
	ParseConfig,
	// Geometry
	Point,
	Rect,
	Size,

	animate,
	index,
	parse,
	parse_with_config,
};
