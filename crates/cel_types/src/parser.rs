//! Conversion of raw Aseprite descriptions into an immutable [`Atlas`].
//!
//! Parsing is all or nothing: the first violated invariant aborts the parse
//! and is returned as an [`AtlasError`]. Nothing is patched up or skipped.
//!
//! # Steps
//!
//! 1. Validate the sheet size.
//! 2. For every frame tag, in order:
//!    - reject a name that was already seen,
//!    - resolve each raw frame index in `from..=to` to the record keyed
//!      `"<name> <index>"`,
//!    - build one [`Cel`] per record (bounds with packer padding removed,
//!      duration, slices),
//!    - assemble the [`Animation`], which validates cel count and durations.
//! 3. Check that every tag listed in [`ParseConfig::required_tags`] exists.

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};

use crate::{
	aseprite::{File, Frame, FrameTag, Slice},
	atlas::{Animation, Atlas, Cel, Direction},
	constants,
	error::AtlasError,
	geometry::{Point, Rect, Size},
	int::Int,
	millis::Millis,
	parse_config::ParseConfig,
};

/// Parses a sprite sheet description using the default configuration.
///
/// # Errors
///
/// Returns the first [`AtlasError`] encountered.
pub fn parse(file: &File) -> Result<Atlas, AtlasError> {
	parse_with_config(file, &ParseConfig::default())
}

/// Parses a sprite sheet description.
///
/// # Errors
///
/// Returns the first [`AtlasError`] encountered.
pub fn parse_with_config(file: &File, config: &ParseConfig) -> Result<Atlas, AtlasError> {
	let size = Size::from_f64(file.meta.size.w, file.meta.size.h)?;
	let animations = parse_animations(file, config)?;

	if let Some(missing) = config.required_tags.iter().find(|tag| !animations.contains_key(*tag)) {
		return Err(AtlasError::MissingTag(missing.clone()));
	}

	debug!(
		"Parsed atlas \"{}\" ({}x{}) with {} animations",
		file.meta.image,
		size.w(),
		size.h(),
		animations.len()
	);
	Ok(Atlas::new(
		file.meta.version.clone(),
		file.meta.image.clone(),
		file.meta.format.clone(),
		size,
		animations,
	))
}

/// Parses every frame tag into an animation keyed by tag name.
///
/// # Errors
///
/// Returns [`AtlasError::DuplicateTag`] if a tag name repeats, or any error of
/// [`parse_animation`].
pub fn parse_animations(
	file: &File,
	config: &ParseConfig,
) -> Result<BTreeMap<String, Animation>, AtlasError> {
	let mut animations = BTreeMap::new();
	for tag in &file.meta.frame_tags {
		if animations.contains_key(&tag.name) {
			return Err(AtlasError::DuplicateTag(tag.name.clone()));
		}
		let animation = parse_animation(tag, &file.frames, &file.meta.slices, config)?;
		animations.insert(tag.name.clone(), animation);
	}
	Ok(animations)
}

/// Parses one frame tag.
///
/// The animation size is taken from the first frame's logical size.
///
/// # Errors
///
/// Returns an error if:
/// - the direction is unknown
/// - a frame in the tag's range is missing
/// - any cel fails to parse
/// - the animation is empty or has an infinite intermediate cel
pub fn parse_animation(
	tag: &FrameTag,
	frames: &HashMap<String, Frame>,
	slices: &[Slice],
	config: &ParseConfig,
) -> Result<Animation, AtlasError> {
	let frames = tag_frames(tag, frames)?;
	let direction: Direction = tag.direction.parse()?;

	let cels = (0_i64..)
		.zip(&frames)
		.map(|(index, frame)| parse_cel(tag, frame, index, slices, config))
		.collect::<Result<Vec<_>, _>>()?;

	let size = frames
		.first()
		.map(|frame| Size::from_f64(frame.source_size.w, frame.source_size.h))
		.transpose()?
		.unwrap_or_default();

	let animation = Animation::new(&tag.name, size, cels, direction)?;
	debug!(
		"Parsed animation \"{}\": {} cels, {}, {}",
		tag.name,
		animation.cels().len(),
		animation.direction(),
		animation.duration()
	);
	Ok(animation)
}

/// Resolves the frame records of a tag's inclusive range.
fn tag_frames<'a>(
	tag: &FrameTag,
	frames: &'a HashMap<String, Frame>,
) -> Result<Vec<&'a Frame>, AtlasError> {
	(tag.from..=tag.to)
		.map(|index| {
			frames.get(&constants::frame_key(&tag.name, index)).ok_or_else(|| {
				AtlasError::MissingFrame {
					tag: tag.name.clone(),
					index,
				}
			})
		})
		.collect()
}

/// Parses one frame of a tag.
///
/// # Arguments
/// * `tag` - Owning tag
/// * `frame` - Raw frame record
/// * `index` - Cel index within the animation, used to select slice keys
/// * `slices` - Every slice of the sheet
/// * `config` - Parse configuration
///
/// # Errors
///
/// Returns an error if the bounds, duration or slices are invalid.
pub fn parse_cel(
	tag: &FrameTag,
	frame: &Frame,
	index: i64,
	slices: &[Slice],
	config: &ParseConfig,
) -> Result<Cel, AtlasError> {
	let bounds = parse_bounds(frame)?;
	let duration = parse_duration(frame.duration, config)?;
	let slices = parse_slices(tag, index, slices)?;
	trace!("  \"{}\" cel {}: {} for {}, {} slices", tag.name, index, bounds, duration, slices.len());
	Cel::new(bounds, duration, slices)
}

/// Computes the logical bounds of a packed frame.
///
/// The packer may grow each frame by a border; half of the difference between
/// the packed and logical size is added to the origin so that the result maps
/// 1:1 onto the sprite.
///
/// # Errors
///
/// Returns [`AtlasError::InvalidGeometry`] if any value is not integral,
/// including an origin that falls on a half pixel.
pub fn parse_bounds(frame: &Frame) -> Result<Rect, AtlasError> {
	let padding = parse_padding(frame)?;
	let position = Point::from_f64(
		frame.frame.x + padding.w().as_f64() / 2.0,
		frame.frame.y + padding.h().as_f64() / 2.0,
	)?;
	let size = Size::from_f64(frame.source_size.w, frame.source_size.h)?;
	Ok(Rect::new(position, size))
}

/// Computes the total border added by the packer.
///
/// # Errors
///
/// Returns [`AtlasError::InvalidGeometry`] if the difference is not integral.
pub fn parse_padding(frame: &Frame) -> Result<Size, AtlasError> {
	Size::from_f64(frame.frame.w - frame.source_size.w, frame.frame.h - frame.source_size.h)
}

/// Converts a raw duration.
///
/// # Errors
///
/// Returns [`AtlasError::NonPositiveDuration`] for zero or negative values and
/// [`AtlasError::Int`] for fractional ones.
pub fn parse_duration(duration: f64, config: &ParseConfig) -> Result<Millis, AtlasError> {
	if duration <= 0.0 {
		return Err(AtlasError::NonPositiveDuration(duration));
	}
	if duration == f64::from(config.infinite_duration) {
		return Ok(Millis::Infinite);
	}
	Ok(Millis::Finite(Int::assert_int(duration)?))
}

/// Collects the slice bounds that apply to a cel.
///
/// Only slices named after the tag are considered. For each, the last key whose
/// frame is at or before `index` applies; a slice with no such key is skipped.
///
/// # Errors
///
/// Returns [`AtlasError::InvalidGeometry`] if an applicable key's bounds are
/// not integral.
pub fn parse_slices(tag: &FrameTag, index: i64, slices: &[Slice]) -> Result<Vec<Rect>, AtlasError> {
	slices
		.iter()
		.filter(|slice| slice.name == tag.name)
		.filter_map(|slice| slice.keys.iter().rfind(|key| key.frame <= index))
		.map(|key| Rect::from_f64(key.bounds.x, key.bounds.y, key.bounds.w, key.bounds.h))
		.collect()
}
