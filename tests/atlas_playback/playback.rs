//! Playing parsed animations

use cel_rs::prelude::*;

use crate::{animation, load_fixture};

fn indices(animation: &Animation, ticks: &[f64]) -> Vec<usize> {
	let mut animator = Animator::new();
	ticks
		.iter()
		.map(|&elapsed| {
			animator.advance(elapsed, animation);
			animator.index(animation)
		})
		.collect()
}

#[test_log::test]
fn test_play_forward() {
	let atlas = load_fixture();
	let idle = animation(&atlas, "idle");

	assert_eq!(indices(idle, &[99.0, 1.0, 199.0, 1.0, 100.0]), [0, 1, 1, 0, 1]);
}

#[test_log::test]
fn test_play_ping_pong() {
	let atlas = load_fixture();
	let walk = animation(&atlas, "walk");

	assert_eq!(indices(walk, &[50.0; 8]), [1, 2, 3, 2, 1, 0, 1, 2]);
}

#[test_log::test]
fn test_play_reverse() {
	let atlas = load_fixture();
	let blink = animation(&atlas, "blink");

	assert_eq!(indices(blink, &[30.0, 50.0, 40.0, 30.0]), [2, 1, 0, 2]);
}

#[test_log::test]
fn test_play_holds_infinite_cel() {
	let atlas = load_fixture();
	let hold = animation(&atlas, "hold");

	let mut animator = Animator::new();
	animator.advance(300.0, hold);
	assert_eq!(animator.index(hold), 1);
	assert_eq!(animator.exposure, 50.0);

	animator.advance(1e12, hold);
	assert_eq!(animator.index(hold), 1);
	assert_eq!(animator.cel(hold).duration(), Millis::Infinite);
}

#[test_log::test]
fn test_play_skips_whole_cycles() {
	let atlas = load_fixture();
	for animation in atlas.animations().values() {
		let Some(cycle) = animation.duration().finite() else {
			continue;
		};

		// Many cycles at once land where a single partial step would.
		let partial = 60.0;
		let skipped = animate(Int::ZERO, cycle.as_f64() * 1000.0 + partial, animation);
		let direct = animate(Int::ZERO, partial, animation);
		assert_eq!(skipped.index(animation), direct.index(animation));
		assert_eq!(skipped.exposure, direct.exposure);
	}
}

#[test_log::test]
fn test_play_resume_from_saved_state() {
	let atlas = load_fixture();
	let walk = animation(&atlas, "walk");

	let mut first = Animator::new();
	first.advance(125.0, walk);

	let mut resumed = Animator::with_state(first.period, first.exposure);
	resumed.advance(100.0, walk);
	first.advance(100.0, walk);
	assert_eq!(resumed, first);
	assert_eq!(index(resumed.period, walk.cels()), 2);

	resumed.reset();
	assert_eq!(resumed.index(walk), 0);
	assert_eq!(resumed.exposure, 0.0);
}
