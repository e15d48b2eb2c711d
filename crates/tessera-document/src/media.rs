//! CSS media queries for stylesheet links.

use std::fmt;

use serde::Deserialize;

/// A media type with optional viewport bounds in pixels.
///
/// ```
/// use tessera_document::MediaQuery;
///
/// let mut query = MediaQuery::new("screen");
/// query.set_min_width(600).set_max_width(1200);
/// assert_eq!(
///     query.to_string(),
///     "screen and (min-width:600px) and (max-width:1200px)"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MediaQuery {
	/// Media type, e.g. `screen` or `print`
	pub media: String,
	/// Minimum viewport width
	#[serde(default)]
	pub min_width: Option<u32>,
	/// Maximum viewport width
	#[serde(default)]
	pub max_width: Option<u32>,
	/// Minimum viewport height
	#[serde(default)]
	pub min_height: Option<u32>,
	/// Maximum viewport height
	#[serde(default)]
	pub max_height: Option<u32>,
}

impl MediaQuery {
	/// Creates a query matching every device of `media` type.
	pub fn new(media: impl Into<String>) -> Self {
		Self {
			media: media.into(),
			..Self::default()
		}
	}

	/// Sets the minimum width.
	pub fn set_min_width(&mut self, px: u32) -> &mut Self {
		self.min_width = Some(px);
		self
	}

	/// Sets the maximum width.
	pub fn set_max_width(&mut self, px: u32) -> &mut Self {
		self.max_width = Some(px);
		self
	}

	/// Sets the minimum height.
	pub fn set_min_height(&mut self, px: u32) -> &mut Self {
		self.min_height = Some(px);
		self
	}

	/// Sets the maximum height.
	pub fn set_max_height(&mut self, px: u32) -> &mut Self {
		self.max_height = Some(px);
		self
	}
}

impl fmt::Display for MediaQuery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.media)?;
		let bounds = [
			("min-width", self.min_width),
			("max-width", self.max_width),
			("min-height", self.min_height),
			("max-height", self.max_height),
		];
		for (feature, px) in bounds {
			if let Some(px) = px {
				write!(f, " and ({feature}:{px}px)")?;
			}
		}
		Ok(())
	}
}

impl From<&str> for MediaQuery {
	fn from(media: &str) -> Self {
		Self::new(media)
	}
}
