//! Images.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tessera_core::render::{open_tag, push_opt_attr};
use tessera_core::{AttributeSet, ContentLoader, Render, Result};

use crate::element::impl_attributes;

/// MIME type used when the resource's extension is not recognised.
const FALLBACK_MIME: &str = "image/gif";

/// `<img />`
///
/// `src` is always written; `alt` follows the global attributes.
#[derive(Debug, Clone, Default)]
pub struct Image {
	src: String,
	alt: Option<String>,
	attrs: AttributeSet,
}

impl Image {
	/// Creates an image showing `src`.
	pub fn new(src: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			..Self::default()
		}
	}

	/// Creates an image with alternate text.
	pub fn with_alt(src: impl Into<String>, alt: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			alt: Some(alt.into()),
			..Self::default()
		}
	}

	/// Changes the image URL.
	pub fn set_url(&mut self, src: impl Into<String>) -> &mut Self {
		self.src = src.into();
		self
	}

	/// Returns the image URL.
	pub fn url(&self) -> &str {
		&self.src
	}

	/// Sets the alternate text.
	pub fn set_alt(&mut self, alt: impl Into<String>) -> &mut Self {
		self.alt = Some(alt.into());
		self
	}

	/// Reads the resource at `location` and inlines it as a base64 data URI.
	///
	/// The MIME type is guessed from the extension. On failure the current
	/// URL is kept.
	pub fn load_base64(&mut self, loader: &dyn ContentLoader, location: &str) -> Result<&mut Self> {
		let bytes = loader.load_bytes(location)?;
		let mime = mime_guess::from_path(location)
			.first_raw()
			.filter(|mime| mime.starts_with("image/"))
			.unwrap_or(FALLBACK_MIME);
		tracing::debug!(location, mime, bytes = bytes.len(), "inlined image");
		self.src = format!("data:{mime};base64,{}", STANDARD.encode(bytes));
		Ok(self)
	}
}

impl Render for Image {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "img");
		output.push_str(" src='");
		output.push_str(&self.src);
		output.push('\'');
		self.attrs.render_into(output);
		push_opt_attr(output, "alt", self.alt.as_deref());
		output.push_str(" />");
	}
}

impl_attributes!(Image);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tempfile::TempDir;
	use tessera_core::{FileLoader, GlobalAttributes, MarkupError};

	#[rstest]
	fn test_image_render() {
		let mut image = Image::with_alt("/logo.png", "Logo");
		image.add_class("brand");
		assert_eq!(
			image.render(2),
			"\n\t\t<img src='/logo.png' class='brand' alt='Logo' />"
		);
	}

	#[rstest]
	fn test_image_without_src() {
		assert_eq!(Image::default().render(0), "\n<img src='' />");
	}

	#[rstest]
	#[case("dot.png", "data:image/png;base64,AQID")]
	#[case("dot.bin", "data:image/gif;base64,AQID")]
	fn test_load_base64(#[case] file: &str, #[case] expected: &str) {
		let dir = TempDir::new().unwrap();
		std::fs::write(dir.path().join(file), [1u8, 2, 3]).unwrap();
		let loader = FileLoader::with_root(dir.path());

		let mut image = Image::new("placeholder.gif");
		image.load_base64(&loader, file).unwrap();

		assert_eq!(image.url(), expected);
	}

	#[rstest]
	fn test_load_base64_failure_keeps_url() {
		let dir = TempDir::new().unwrap();
		let loader = FileLoader::with_root(dir.path());

		let mut image = Image::new("placeholder.gif");
		let result = image.load_base64(&loader, "missing.png");

		assert!(matches!(result, Err(MarkupError::ResourceUnavailable { .. })));
		assert_eq!(image.url(), "placeholder.gif");
	}
}
