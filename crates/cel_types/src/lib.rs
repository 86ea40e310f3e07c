//! This crate provides the sprite sheet model and playback logic for the `cel-rs` project.
//!
//! # Overview
//!
//! - **Parsing**: turns the JSON description written by Aseprite's "Export Sprite
//!   Sheet" command into an immutable [`Atlas`] of named [`Animation`]s
//! - **Playback**: [`animate`] advances a `(period, exposure)` pair through an
//!   animation's cels in forward, reverse or ping-pong order
//! - **Numbers**: [`Int`] is an integer bounded to the range every IEEE 754 double
//!   represents exactly, used for all geometry and durations
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use cel_types::prelude::*;
//!
//! # fn main() -> Result<(), AtlasError> {
//! let json = r#"{
//!   "frames": {
//!     "idle 0": {"frame": {"x": 1, "y": 1, "w": 18, "h": 18}, "sourceSize": {"w": 16, "h": 16}, "duration": 100},
//!     "idle 1": {"frame": {"x": 19, "y": 1, "w": 18, "h": 18}, "sourceSize": {"w": 16, "h": 16}, "duration": 100}
//!   },
//!   "meta": {
//!     "version": "1.2.8.1", "image": "atlas.png", "format": "RGBA8888", "size": {"w": 64, "h": 64},
//!     "frameTags": [{"name": "idle", "from": 0, "to": 1, "direction": "forward"}]
//!   }
//! }"#;
//!
//! let atlas = Atlas::from_json_str(json)?;
//! let idle = atlas.animation("idle").expect("idle is defined");
//!
//! let mut animator = Animator::new();
//! animator.advance(150.0, idle);
//! assert_eq!(animator.index(idle), 1);
//! assert_eq!(animator.cel(idle).position(), Point::new(Int::from(20), Int::from(2)));
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use cel_types::{atlas::Atlas, animator::animate, int::Int};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let atlas = Atlas::from_bytes(&std::fs::read("atlas.json")?)?;
//! for animation in atlas.animations().values() {
//!     let state = animate(Int::ZERO, 16.667, animation);
//!     println!("{} {}", state.period, state.exposure);
//! }
//! # Ok(())
//! # }
//! ```

pub mod animator;
pub mod aseprite;
pub mod atlas;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod int;
pub mod millis;
pub mod parse_config;
pub mod parser;

/// `use cel_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use animator::{Animator, animate, index};
pub use atlas::{Animation, Atlas, Cel, Direction};
pub use error::{AtlasError, IntError};
pub use geometry::{Point, Rect, Size};
pub use int::{Int, MAX_SAFE_INTEGER};
pub use millis::Millis;
pub use parse_config::ParseConfig;
pub use parser::{parse, parse_with_config};
