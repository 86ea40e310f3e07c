//! Raw Aseprite sprite sheet description.
//!
//! These types mirror the JSON written by Aseprite's "Export Sprite Sheet"
//! command with the item filename set to `{tag} {frame}`. They are untrusted
//! and loosely typed: every geometric value and duration is an `f64` as found
//! in the JSON, and nothing is validated until [`parse`](crate::parse).
//!
//! # JSON layout
//!
//! ```text
//! {
//!   "frames": {
//!     "idle 0": {
//!       "frame": {"x": 1, "y": 1, "w": 18, "h": 18},
//!       "sourceSize": {"w": 16, "h": 16},
//!       "duration": 100
//!     }
//!   },
//!   "meta": {
//!     "version": "1.2.8.1",
//!     "image": "atlas.png",
//!     "format": "RGBA8888",
//!     "size": {"w": 64, "h": 64},
//!     "frameTags": [{"name": "idle", "from": 0, "to": 0, "direction": "forward"}],
//!     "slices": [{"name": "idle", "keys": [{"frame": 0, "bounds": {"x": 4, "y": 4, "w": 8, "h": 8}}]}]
//!   }
//! }
//! ```
//!
//! `frames` may also be an array of records that each carry a `filename`
//! field, which is the layout Aseprite writes when "Array" is selected.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// A complete sprite sheet description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct File {
	/// Frame records keyed by `"<tag> <frame index>"`
	#[serde(deserialize_with = "deserialize_frames")]
	pub frames: HashMap<String, Frame>,
	/// Sheet metadata
	pub meta: Meta,
}

/// Sheet level metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
	/// Aseprite version, e.g. `1.2.8.1`
	pub version: String,
	/// Image basename, e.g. `atlas.png`
	pub image: String,
	/// Pixel format, e.g. `RGBA8888` or `I8`
	pub format: String,
	/// Image dimensions
	pub size: Wh,
	/// Animation ranges
	#[serde(default)]
	pub frame_tags: Vec<FrameTag>,
	/// Named sub-rectangles
	#[serde(default)]
	pub slices: Vec<Slice>,
}

/// One packed frame.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
	/// Packed bounds within the sheet, padding included
	pub frame: Rect,
	/// Logical sprite dimensions
	pub source_size: Wh,
	/// Exposure in milliseconds; [`INFINITE_DURATION`](crate::constants::INFINITE_DURATION) holds forever
	pub duration: f64,
}

/// An inclusive range of frames played as one animation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrameTag {
	/// Animation name
	pub name: String,
	/// First raw frame index
	pub from: i64,
	/// Last raw frame index (inclusive)
	pub to: i64,
	/// `forward`, `reverse` or `pingpong`
	pub direction: String,
}

/// A named rectangle that may change shape over an animation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slice {
	/// Name of the tag this slice belongs to
	pub name: String,
	/// Shape changes ordered by frame
	pub keys: Vec<Key>,
}

/// A slice shape starting at a given cel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Key {
	/// Cel index within the animation at which these bounds take effect
	pub frame: i64,
	/// Bounds in cel-local pixels
	pub bounds: Rect,
}

/// Raw rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rect {
	/// Horizontal origin
	pub x: f64,
	/// Vertical origin
	pub y: f64,
	/// Width
	pub w: f64,
	/// Height
	pub h: f64,
}

/// Raw width and height.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Wh {
	/// Width
	pub w: f64,
	/// Height
	pub h: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FrameLayout {
	Hash(HashMap<String, Frame>),
	Array(Vec<NamedFrame>),
}

#[derive(Deserialize)]
struct NamedFrame {
	filename: String,
	#[serde(flatten)]
	frame: Frame,
}

fn deserialize_frames<'de, D>(deserializer: D) -> Result<HashMap<String, Frame>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match FrameLayout::deserialize(deserializer)? {
		FrameLayout::Hash(frames) => frames,
		FrameLayout::Array(frames) => {
			frames.into_iter().map(|named| (named.filename, named.frame)).collect()
		}
	})
}
