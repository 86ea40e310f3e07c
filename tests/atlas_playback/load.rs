//! Loading and validating sprite sheet descriptions

use std::io::Cursor;

use cel_rs::prelude::*;
use serde_json::{Value, json};

use crate::{ATLAS_JSON, animation, load_fixture};

fn int(value: i32) -> Int {
	Int::from(value)
}

fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
	Rect::new(Point::new(int(x), int(y)), Size::new(int(w), int(h)))
}

#[test_log::test]
fn test_load_metadata() {
	let atlas = load_fixture();
	assert_eq!(atlas.version(), "1.2.8.1");
	assert_eq!(atlas.filename(), "atlas.png");
	assert_eq!(atlas.format(), "RGBA8888");
	assert_eq!(atlas.size(), Size::new(int(128), int(64)));

	let names: Vec<&str> = atlas.animations().keys().map(String::as_str).collect();
	assert_eq!(names, ["blink", "hold", "idle", "walk"]);
}

#[test_log::test]
fn test_load_animations() {
	let atlas = load_fixture();

	let idle = animation(&atlas, "idle");
	assert_eq!(idle.direction(), Direction::Forward);
	assert_eq!(idle.size(), Size::new(int(16), int(16)));
	assert_eq!(idle.duration(), Millis::Finite(int(300)));
	assert_eq!(idle.cels()[0].bounds(), rect(1, 1, 16, 16));
	assert_eq!(idle.cels()[1].bounds(), rect(19, 1, 16, 16));
	assert_eq!(idle.cels()[1].duration(), Millis::Finite(int(200)));
	assert_eq!(idle.cel(1).map(Cel::size), Some(idle.size()));
	assert!(idle.cel(2).is_none());

	// Interior cels count twice.
	let walk = animation(&atlas, "walk");
	assert_eq!(walk.direction(), Direction::PingPong);
	assert_eq!(walk.duration(), Millis::Finite(int(300)));

	let blink = animation(&atlas, "blink");
	assert_eq!(blink.direction(), Direction::Reverse);
	assert_eq!(blink.duration(), Millis::Finite(int(120)));
	assert_eq!(blink.cels()[1].position(), Point::new(int(1), int(19)));

	let hold = animation(&atlas, "hold");
	assert_eq!(hold.cels()[1].duration(), Millis::Infinite);
	assert_eq!(hold.duration(), Millis::Infinite);
}

#[test_log::test]
fn test_load_slices() {
	let atlas = load_fixture();

	let idle = animation(&atlas, "idle");
	assert_eq!(idle.cels()[0].slices(), [rect(4, 4, 8, 8)]);
	assert_eq!(idle.cels()[1].slices(), [rect(4, 5, 8, 7)]);

	// A single key applies to every later cel.
	let walk = animation(&atlas, "walk");
	assert!(walk.cels().iter().all(|cel| cel.slices() == [rect(0, 0, 16, 16)]));

	let blink = animation(&atlas, "blink");
	assert!(blink.cels().iter().all(|cel| cel.slices().is_empty()));
}

#[test_log::test]
fn test_load_array_frames() {
	let mut value: Value = serde_json::from_str(ATLAS_JSON).unwrap();
	let Value::Object(frames) = value["frames"].take() else {
		panic!("frames should be a hash");
	};
	value["frames"] = frames
		.into_iter()
		.map(|(filename, mut frame)| {
			frame["filename"] = json!(filename);
			frame
		})
		.collect::<Vec<_>>()
		.into();

	let atlas = Atlas::from_bytes(value.to_string().as_bytes()).unwrap();
	assert_eq!(atlas, load_fixture());
}

#[test_log::test]
fn test_load_from_reader_with_config() {
	let toml = r#"
		infinite_duration = 250
		required_tags = ["idle", "walk"]
	"#;
	let config: ParseConfig = config::Config::builder()
		.add_source(config::File::from_str(toml, config::FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap();
	assert_eq!(config.infinite_duration, 250);

	// A 250ms cel is now infinite, so "hold" has an infinite intermediate cel.
	let err = Atlas::from_reader(&mut Cursor::new(ATLAS_JSON), &config).expect_err("hold should be rejected");
	match err {
		AtlasError::InfiniteIntermediateCel(tag) => assert_eq!(tag, "hold"),
		_ => panic!("Unexpected error: {err:?}"),
	}
}

#[test_log::test]
fn test_load_missing_required_tag() {
	let config = ParseConfig::default().with_required_tags(["idle", "run"]);
	let err = Atlas::from_bytes_with_config(ATLAS_JSON.as_bytes(), &config).expect_err("run is not defined");
	match err {
		AtlasError::MissingTag(tag) => assert_eq!(tag, "run"),
		_ => panic!("Unexpected error: {err:?}"),
	}
}

#[test_log::test]
fn test_load_rejects_malformed_json() {
	let err = Atlas::from_json_str(&ATLAS_JSON[..ATLAS_JSON.len() / 2]).expect_err("truncated JSON");
	assert!(matches!(err, AtlasError::Json(_)), "Unexpected error: {err:?}");
}

#[test_log::test]
fn test_load_rejects_missing_frame() {
	let json = ATLAS_JSON.replace("\"walk 4\"", "\"walk 44\"");
	let err = Atlas::from_json_str(&json).expect_err("walk 4 is gone");
	match err {
		AtlasError::MissingFrame {
			tag,
			index,
		} => {
			assert_eq!(tag, "walk");
			assert_eq!(index, 4);
		}
		_ => panic!("Unexpected error: {err:?}"),
	}
}

#[test_log::test]
fn test_serialize_atlas() {
	let value = serde_json::to_value(load_fixture()).unwrap();

	assert_eq!(value["filename"], "atlas.png");
	assert_eq!(value["animations"]["walk"]["direction"], "pingpong");
	assert_eq!(value["animations"]["hold"]["duration"], "infinite");
	assert_eq!(value["animations"]["idle"]["duration"], 300);
	assert_eq!(
		value["animations"]["idle"]["cels"][1]["bounds"],
		json!({"x": 19, "y": 1, "w": 16, "h": 16})
	);
}
