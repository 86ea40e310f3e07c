//! End-to-end tests for `cel-rs`: load a real-shaped Aseprite export and play it back.

mod load;
mod playback;

use cel_rs::prelude::*;

/// A sheet with one animation per playback direction plus one that holds forever.
pub(crate) const ATLAS_JSON: &str = include_str!("atlas.json");

pub(crate) fn load_fixture() -> Atlas {
	Atlas::from_json_str(ATLAS_JSON).expect("fixture should parse")
}

pub(crate) fn animation<'a>(atlas: &'a Atlas, name: &str) -> &'a Animation {
	atlas.animation(name).unwrap_or_else(|| panic!("missing \"{name}\" animation"))
}
