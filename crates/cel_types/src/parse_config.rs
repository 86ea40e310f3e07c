//! Parse configuration for sprite sheet descriptions.
//!
//! This module provides the options that tune how a raw description is turned
//! into an [`Atlas`](crate::Atlas).

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::constants;

/// Configuration for parsing sprite sheet descriptions.
///
/// # Fields
///
/// 1. **`infinite_duration`**: raw frame duration that maps to "hold forever"
/// 2. **`required_tags`**: tag names the sheet must define
///
/// The configuration deserializes from any serde format with every field
/// optional, so it can be loaded from a config file as-is.
///
/// # Examples
///
/// ```
/// use cel_types::ParseConfig;
///
/// // Aseprite defaults
/// let config = ParseConfig::default();
/// assert_eq!(config.infinite_duration, 0xFFFF);
///
/// // Fail unless the sheet defines these animations
/// let config = ParseConfig::default().with_required_tags(["idle", "walk"]);
/// assert_eq!(config.required_tags.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
	/// Raw frame duration treated as infinite
	pub infinite_duration: u16,
	/// Tag names that must be present after parsing
	pub required_tags: BTreeSet<String>,
}

impl Default for ParseConfig {
	fn default() -> Self {
		Self {
			infinite_duration: constants::INFINITE_DURATION,
			required_tags: BTreeSet::new(),
		}
	}
}

impl ParseConfig {
	/// Create a new parse configuration.
	///
	/// # Arguments
	/// * `infinite_duration` - Raw duration treated as infinite
	/// * `required_tags` - Tag names the sheet must define
	pub fn new(infinite_duration: u16, required_tags: BTreeSet<String>) -> Self {
		Self {
			infinite_duration,
			required_tags,
		}
	}

	/// Adds tag names that must be present after parsing.
	pub fn with_required_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.required_tags.extend(tags.into_iter().map(Into::into));
		self
	}
}
