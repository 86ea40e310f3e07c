//! Sprite sheet format constants.
//!
//! Values shared by the raw Aseprite JSON export and the parser.

/// Frame duration that means "hold forever" (0xFFFF milliseconds)
pub const INFINITE_DURATION: u16 = 0xFFFF;

/// Raw direction tag for forward playback
pub const DIRECTION_FORWARD: &str = "forward";

/// Raw direction tag for reverse playback
pub const DIRECTION_REVERSE: &str = "reverse";

/// Raw direction tag for ping-pong playback
pub const DIRECTION_PING_PONG: &str = "pingpong";

/// Builds the frame record key for a tag and a raw frame index, e.g. `"idle 3"`.
pub fn frame_key(tag: &str, index: i64) -> String {
	format!("{tag} {index}")
}
