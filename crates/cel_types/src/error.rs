//! Error types for bounded integers and sprite sheet parsing.

use thiserror::Error;

/// Errors that can occur when converting a number into an [`Int`](crate::Int)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntError {
	/// The value is NaN
	#[error("NaN cannot be converted to an Int")]
	NotANumber,

	/// The value is fractional, infinite or outside the safe integer range
	#[error("{0} is not an Int")]
	NotAnInteger(f64),
}

/// Errors that can occur when parsing a sprite sheet description into an
/// [`Atlas`](crate::Atlas).
///
/// Every variant is terminal for the parse that produced it. No partially
/// built atlas is ever returned.
#[derive(Debug, Error)]
pub enum AtlasError {
	/// Two frame tags share a name
	#[error("Duplicate tag \"{0}\"")]
	DuplicateTag(String),

	/// A tag spans a frame index that has no frame record
	#[error("Missing frame \"{tag} {index}\"")]
	MissingFrame {
		/// Tag name
		tag: String,
		/// Raw frame index within the sheet
		index: i64,
	},

	/// A coordinate or dimension is not integral
	#[error("Invalid geometry: {field} is {value}")]
	InvalidGeometry {
		/// Name of the offending field
		field: &'static str,
		/// Offending value
		value: f64,
	},

	/// A cel duration is zero or negative
	#[error("Expected positive cel duration, got {0}")]
	NonPositiveDuration(f64),

	/// A tag resolved to no cels
	#[error("\"{0}\" animation missing cels")]
	EmptyAnimation(String),

	/// A cel other than the last one holds forever
	#[error("Intermediate cel has infinite duration for \"{0}\" animation")]
	InfiniteIntermediateCel(String),

	/// A frame tag declares an unsupported playback direction
	#[error("\"{0}\" is not a direction")]
	UnknownDirection(String),

	/// A tag required by the parse configuration is absent
	#[error("Required tag \"{0}\" not found")]
	MissingTag(String),

	/// Invalid bounded integer
	#[error(transparent)]
	Int(#[from] IntError),

	/// Malformed JSON input
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
