//! Immutable sprite sheet model.
//!
//! An [`Atlas`] is produced once by [`parse`](crate::parse) and never mutated
//! afterwards. None of the types here expose mutators; the only way to build
//! an [`Animation`] or a [`Cel`] is through constructors that enforce their
//! invariants, so any value you hold is valid.

use std::{collections::BTreeMap, fmt, io::Read, str::FromStr};

use serde::Serialize;

use crate::{
	aseprite,
	constants,
	error::{AtlasError, IntError},
	geometry::{Point, Rect, Size},
	int::Int,
	millis::Millis,
	parse_config::ParseConfig,
	parser,
};

/// Playback direction of an [`Animation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	/// `0, 1, …, len - 1, 0, 1, …`
	Forward,
	/// `len - 1, …, 1, 0, len - 1, …`
	Reverse,
	/// `0, 1, …, len - 1, len - 2, …, 1, 0, 1, …`
	PingPong,
}

impl Direction {
	/// Every direction, in declaration order.
	pub const ALL: [Self; 3] = [Self::Forward, Self::Reverse, Self::PingPong];

	/// Returns the raw Aseprite name of the direction.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Forward => constants::DIRECTION_FORWARD,
			Self::Reverse => constants::DIRECTION_REVERSE,
			Self::PingPong => constants::DIRECTION_PING_PONG,
		}
	}
}

impl FromStr for Direction {
	type Err = AtlasError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			constants::DIRECTION_FORWARD => Ok(Self::Forward),
			constants::DIRECTION_REVERSE => Ok(Self::Reverse),
			constants::DIRECTION_PING_PONG => Ok(Self::PingPong),
			_ => Err(AtlasError::UnknownDirection(s.to_string())),
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single frame of an animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cel {
	bounds: Rect,
	duration: Millis,
	slices: Vec<Rect>,
}

impl Cel {
	/// Creates a cel.
	///
	/// # Arguments
	/// * `bounds` - Location and area within the sheet image
	/// * `duration` - Positive exposure, possibly infinite
	/// * `slices` - Sub-rectangles in cel-local pixels
	///
	/// # Errors
	///
	/// Returns [`AtlasError::NonPositiveDuration`] if `duration` is finite and not positive.
	pub fn new(bounds: Rect, duration: Millis, slices: Vec<Rect>) -> Result<Self, AtlasError> {
		if let Millis::Finite(ms) = duration
			&& ms <= Int::ZERO
		{
			return Err(AtlasError::NonPositiveDuration(ms.as_f64()));
		}
		Ok(Self {
			bounds,
			duration,
			slices,
		})
	}

	/// Location and area within the sheet image. The size always matches the
	/// owning animation's size.
	pub fn bounds(&self) -> Rect {
		self.bounds
	}

	/// Top-left corner within the sheet image
	pub fn position(&self) -> Point {
		self.bounds.position()
	}

	/// Dimensions within the sheet image
	pub fn size(&self) -> Size {
		self.bounds.size()
	}

	/// Exposure in milliseconds, possibly infinite
	pub fn duration(&self) -> Millis {
		self.duration
	}

	/// Slices within the cel, in cel-local pixels
	pub fn slices(&self) -> &[Rect] {
		&self.slices
	}
}

/// An ordered, non-empty sequence of cels played in one direction.
///
/// # Duration
///
/// For forward and reverse playback the duration is the sum of every cel's
/// duration. A ping-pong animation with more than two cels also revisits its
/// interior cels on the way back, so the interior durations are counted twice.
/// With five cels of 1, 2, 3, 4 and 5 milliseconds the cycle lasts
/// `15 + (2 + 3 + 4) = 24` milliseconds.
///
/// # Examples
///
/// ```
/// use cel_types::{Animation, Cel, Direction, Int, Millis, Rect, Size};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cel = |ms: i32| Cel::new(Rect::default(), Millis::Finite(Int::from(ms)), Vec::new());
/// let cels = vec![cel(1)?, cel(2)?, cel(3)?, cel(4)?, cel(5)?];
/// let animation = Animation::new("frog", Size::default(), cels, Direction::PingPong)?;
/// assert_eq!(animation.duration(), Millis::Finite(Int::from(24)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animation {
	size: Size,
	cels: Vec<Cel>,
	duration: Millis,
	direction: Direction,
}

impl Animation {
	/// Creates an animation and computes its cycle duration.
	///
	/// `name` is only used to describe failures.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - `cels` is empty ([`AtlasError::EmptyAnimation`])
	/// - a cel other than the last is infinite ([`AtlasError::InfiniteIntermediateCel`])
	/// - the cycle duration exceeds [`Int::MAX`] ([`AtlasError::Int`])
	pub fn new(
		name: &str,
		size: Size,
		cels: Vec<Cel>,
		direction: Direction,
	) -> Result<Self, AtlasError> {
		let Some((_, intermediate)) = cels.split_last() else {
			return Err(AtlasError::EmptyAnimation(name.to_string()));
		};
		if intermediate.iter().any(|cel| cel.duration.is_infinite()) {
			return Err(AtlasError::InfiniteIntermediateCel(name.to_string()));
		}

		let duration = cycle_duration(&cels, direction)?;
		Ok(Self {
			size,
			cels,
			duration,
			direction,
		})
	}

	/// Width and height of every cel
	pub fn size(&self) -> Size {
		self.size
	}

	/// Cels in forward order. Never empty.
	pub fn cels(&self) -> &[Cel] {
		&self.cels
	}

	/// Returns the cel at `index`, if any.
	pub fn cel(&self, index: usize) -> Option<&Cel> {
		self.cels.get(index)
	}

	/// Positive length of one full cycle in milliseconds, possibly infinite
	pub fn duration(&self) -> Millis {
		self.duration
	}

	/// Playback direction
	pub fn direction(&self) -> Direction {
		self.direction
	}
}

/// Sums the cycle in a wide type. A total outside the `Int` range is an error
/// rather than a clamped value, since playback reduces exposure modulo it.
fn cycle_duration(cels: &[Cel], direction: Direction) -> Result<Millis, AtlasError> {
	let mut durations = Vec::with_capacity(cels.len());
	for cel in cels {
		match cel.duration {
			Millis::Finite(ms) => durations.push(i128::from(ms.get())),
			Millis::Infinite => return Ok(Millis::Infinite),
		}
	}

	let forward: i128 = durations.iter().sum();
	let total = match (direction, durations.as_slice()) {
		// Interior cels are shown again on the way back.
		(Direction::PingPong, [first, _, .., last]) => forward + (forward - first - last),
		_ => forward,
	};

	i64::try_from(total)
		.ok()
		.and_then(Int::new)
		.map(Millis::Finite)
		.ok_or(AtlasError::Int(IntError::NotAnInteger(total as f64)))
}

/// Every animation and the metadata of one sprite sheet.
///
/// # Examples
///
/// ```
/// use cel_types::Atlas;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = r#"{
///     "frames": {},
///     "meta": {
///         "version": "1.2.8.1",
///         "image": "atlas.png",
///         "format": "I8",
///         "size": {"w": 1, "h": 2},
///         "frameTags": [],
///         "slices": []
///     }
/// }"#;
/// let atlas = Atlas::from_json_str(json)?;
/// assert_eq!(atlas.filename(), "atlas.png");
/// assert!(atlas.animations().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Atlas {
	version: String,
	filename: String,
	format: String,
	size: Size,
	animations: BTreeMap<String, Animation>,
}

impl Atlas {
	pub(crate) fn new(
		version: String,
		filename: String,
		format: String,
		size: Size,
		animations: BTreeMap<String, Animation>,
	) -> Self {
		Self {
			version,
			filename,
			format,
			size,
			animations,
		}
	}

	/// Parses a JSON sprite sheet description using the default configuration.
	///
	/// # Errors
	///
	/// Returns [`AtlasError::Json`] for malformed JSON, or any parse error.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AtlasError> {
		Self::from_bytes_with_config(data, &ParseConfig::default())
	}

	/// Parses a JSON sprite sheet description.
	///
	/// # Errors
	///
	/// Returns [`AtlasError::Json`] for malformed JSON, or any parse error.
	pub fn from_bytes_with_config(data: &[u8], config: &ParseConfig) -> Result<Self, AtlasError> {
		let file: aseprite::File = serde_json::from_slice(data)?;
		parser::parse_with_config(&file, config)
	}

	/// Parses a JSON sprite sheet description from a string.
	///
	/// # Errors
	///
	/// Returns [`AtlasError::Json`] for malformed JSON, or any parse error.
	pub fn from_json_str(json: &str) -> Result<Self, AtlasError> {
		Self::from_bytes(json.as_bytes())
	}

	/// Reads and parses a JSON sprite sheet description.
	///
	/// # Errors
	///
	/// Returns [`AtlasError::IOError`] if reading fails, or any error of
	/// [`Atlas::from_bytes_with_config`].
	pub fn from_reader<R: Read>(reader: &mut R, config: &ParseConfig) -> Result<Self, AtlasError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes_with_config(&data, config)
	}

	/// Aseprite version of the description, e.g. `1.2.8.1`
	pub fn version(&self) -> &str {
		&self.version
	}

	/// Sheet image basename, e.g. `atlas.png`
	pub fn filename(&self) -> &str {
		&self.filename
	}

	/// Sheet image pixel format, e.g. `RGBA8888` or `I8`
	pub fn format(&self) -> &str {
		&self.format
	}

	/// Sheet image dimensions
	pub fn size(&self) -> Size {
		self.size
	}

	/// Animations by tag name
	pub fn animations(&self) -> &BTreeMap<String, Animation> {
		&self.animations
	}

	/// Looks up an animation by tag name.
	pub fn animation(&self, name: &str) -> Option<&Animation> {
		self.animations.get(name)
	}
}

impl fmt::Display for Atlas {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Atlas({}, {} {}x{}, {} animations)",
			self.filename,
			self.format,
			self.size.w(),
			self.size.h(),
			self.animations.len()
		)
	}
}
