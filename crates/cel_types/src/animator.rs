//! Playback state for an [`Animation`].
//!
//! The animator is a pair of numbers owned by whoever drives one sprite:
//!
//! - **period**: an oscillation counter. It is not kept within the cel range
//!   and may even go negative; [`index`] folds it into a valid cel position.
//! - **exposure**: milliseconds spent on the current cel.
//!
//! Advancing is a pure function of `(period, exposure, animation)`. Each call
//! adds the elapsed time to the exposure and then moves through as many cels
//! as that time covers, stepping the period according to the animation's
//! [`Direction`].
//!
//! # Examples
//!
//! ```
//! use cel_types::{Animation, Animator, Cel, Direction, Int, Millis, Rect, Size};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cel = || Cel::new(Rect::default(), Millis::Finite(Int::from(100)), Vec::new());
//! let animation = Animation::new("walk", Size::default(), vec![cel()?, cel()?, cel()?], Direction::Forward)?;
//!
//! let mut animator = Animator::new();
//! animator.advance(250.0, &animation);
//! assert_eq!(animator.index(&animation), 2);
//! assert_eq!(animator.exposure, 50.0);
//! # Ok(())
//! # }
//! ```

use crate::{
	atlas::{Animation, Cel, Direction},
	int::Int,
};

/// Playback position within an [`Animation`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Animator {
	/// `Cel` oscillation state. Carry it over between calls unless the cel
	/// is set manually. Any integer in `[0, cels.len())` is a valid start.
	pub period: Int,
	/// Exposure of the current cel in milliseconds, in `[0, ∞)`. Carry it
	/// over between calls and zero it on a manual cel change.
	pub exposure: f64,
}

impl Animator {
	/// Creates an animator at the first cel with no exposure.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an animator from a saved state.
	pub fn with_state(period: Int, exposure: f64) -> Self {
		Self {
			period,
			exposure,
		}
	}

	/// Applies `elapsed` milliseconds of playback.
	///
	/// # Arguments
	/// * `elapsed` - Time since the last call, e.g. ~16.667 at 60 frames per second
	/// * `animation` - The animation being played
	pub fn advance(&mut self, elapsed: f64, animation: &Animation) {
		*self = animate(self.period, self.exposure + elapsed, animation);
	}

	/// Returns to the first cel and clears the exposure. Call this when
	/// switching to a different animation.
	pub fn reset(&mut self) {
		*self = Self::new();
	}

	/// Index of the current cel.
	pub fn index(&self, animation: &Animation) -> usize {
		index(self.period, animation.cels())
	}

	/// The current cel.
	pub fn cel<'a>(&self, animation: &'a Animation) -> &'a Cel {
		&animation.cels()[self.index(animation)]
	}
}

/// Advances playback, possibly moving to later cels.
///
/// Whole animation cycles are skipped up front, so the worst case walks every
/// cel once, when `exposure` is just under `animation.duration()`.
///
/// # Arguments
/// * `period` - The current period
/// * `exposure` - The previous exposure plus the time elapsed since the last call
/// * `animation` - The animation being played
///
/// # Returns
/// The new period and exposure, to be passed to the next call.
///
/// # Panics
///
/// In debug builds, if `exposure` is negative, infinite or NaN.
pub fn animate(period: Int, exposure: f64, animation: &Animation) -> Animator {
	debug_assert!(
		exposure.is_finite() && exposure >= 0.0,
		"exposure must be finite and non-negative, got {exposure}"
	);

	// Any number modulo infinity is itself.
	let mut exposure = exposure % animation.duration().as_f64();
	let mut period = period;

	let cels = animation.cels();
	if cels.len() < 2 {
		return Animator::with_state(period, exposure);
	}

	loop {
		let duration = cels[index(period, cels)].duration().as_f64();
		if exposure < duration {
			break;
		}
		exposure -= duration;
		period = next_period(animation.direction(), period, cels.len());
	}

	Animator::with_state(period, exposure)
}

/// Folds a period into a cel index in `[0, cels.len())`.
///
/// The period is reduced with truncating remainder and then made absolute, so
/// negative periods mirror positive ones.
///
/// # Panics
///
/// If `cels` is empty. Every [`Animation`] has at least one cel.
pub fn index(period: Int, cels: &[Cel]) -> usize {
	let len = cels.len() as i64;
	(period.get() % len).unsigned_abs() as usize
}

/// Steps a period once in `direction`. The result need not be a valid index.
fn next_period(direction: Direction, period: Int, len: usize) -> Int {
	let period = i128::from(period.get());
	let len = len as i128;
	let max = i128::from(Int::MAX.get());

	let next = match direction {
		// Domain [0, len - 1].
		Direction::Forward => period % max + 1,
		// Domain (-∞, len - 1].
		Direction::Reverse => {
			let next = period % max - 1 + len;
			if next > max { next % len } else { next }
		}
		// Domain [2 - len, len - 1].
		Direction::PingPong => wrap(period - 1, 2 - len, len),
	};
	Int::saturate(next)
}

/// Maps `value` into `[low, high)` with floored remainder.
fn wrap(value: i128, low: i128, high: i128) -> i128 {
	low + (value - low).rem_euclid(high - low)
}
