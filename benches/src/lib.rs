//! Benchmark helper utilities for cel-rs
//!
//! This module generates synthetic Aseprite sprite sheet descriptions so the
//! parser and the animator can be measured without shipping real assets.

use serde_json::{Map, Value, json};

/// Width and height of every generated cel, padding excluded
pub const CEL_SIZE: u32 = 16;

/// Padding around every generated cel on each side
pub const PADDING: u32 = 1;

/// Generates a sprite sheet description with `tags` animations of `cels` cels each
///
/// Frames are laid out on a single row. Tags cycle through the three playback
/// directions and every cel carries one slice key so the slice lookup is
/// exercised as well.
pub fn generate_atlas_json(tags: usize, cels: usize) -> String {
	let stride = CEL_SIZE + PADDING * 2;
	let mut frames = Map::new();
	let mut frame_tags = Vec::with_capacity(tags);
	let mut slices = Vec::with_capacity(tags);

	for tag in 0..tags {
		let name = format!("tag{tag}");
		let from = tag * cels;
		let to = from + cels - 1;

		for index in from..=to {
			frames.insert(
				format!("{name} {index}"),
				json!({
					"frame": {"x": index as u32 * stride, "y": 0, "w": stride, "h": stride},
					"sourceSize": {"w": CEL_SIZE, "h": CEL_SIZE},
					"duration": 10 + (index % 7) * 10,
				}),
			);
		}

		let direction = ["forward", "reverse", "pingpong"][tag % 3];
		frame_tags.push(json!({"name": name, "from": from, "to": to, "direction": direction}));

		let keys: Vec<Value> = (0..cels)
			.map(|frame| json!({"frame": frame, "bounds": {"x": frame % 4, "y": 0, "w": 4, "h": 4}}))
			.collect();
		slices.push(json!({"name": name, "keys": keys}));
	}

	json!({
		"frames": frames,
		"meta": {
			"version": "1.2.8.1",
			"image": "atlas.png",
			"format": "RGBA8888",
			"size": {"w": (tags * cels) as u32 * stride, "h": stride},
			"frameTags": frame_tags,
			"slices": slices,
		},
	})
	.to_string()
}

/// Common benchmark sizes as `(tags, cels per tag)`
pub mod sizes {
	/// A single short loop
	pub const TINY: (usize, usize) = (1, 4);
	/// A handful of character animations
	pub const SMALL: (usize, usize) = (8, 8);
	/// A full character sheet
	pub const MEDIUM: (usize, usize) = (64, 16);
	/// Every sprite of a small game in one sheet
	pub const LARGE: (usize, usize) = (256, 32);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_atlas_json_parses() {
		let (tags, cels) = sizes::SMALL;
		let atlas = cel_types::Atlas::from_json_str(&generate_atlas_json(tags, cels)).unwrap();

		assert_eq!(atlas.animations().len(), tags);
		let tag1 = atlas.animation("tag1").unwrap();
		assert_eq!(tag1.cels().len(), cels);
		assert_eq!(tag1.direction(), cel_types::Direction::Reverse);
		assert_eq!(tag1.cels()[0].slices().len(), 1);
	}
}
