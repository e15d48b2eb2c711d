//! Padded HTML comments used as visual separators in the output.

use tessera_core::{ContentLoader, Render, Result};

/// An HTML comment centred in a run of dash characters.
///
/// With a target `width`, the text is padded so the dashes, the text and the
/// two surrounding spaces span about `width` characters. The comment always
/// starts after a blank line and ignores the nesting level.
///
/// ```
/// use tessera_core::Render;
/// use tessera_elements::Comment;
///
/// assert_eq!(Comment::new("hi", 10, "-").render(0), "\n\n<!-- -- hi --- -->\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
	text: String,
	width: usize,
	dash: String,
}

impl Default for Comment {
	fn default() -> Self {
		Self {
			text: String::new(),
			width: 0,
			dash: "-".to_string(),
		}
	}
}

impl Comment {
	/// Creates a comment padded to `width` with `dash`.
	pub fn new(text: impl Into<String>, width: usize, dash: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			width,
			dash: dash.into(),
		}
	}

	/// Creates an unpadded comment.
	pub fn plain(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}

	/// Returns the comment text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Changes the padding string.
	pub fn set_dash(&mut self, dash: impl Into<String>) -> &mut Self {
		self.dash = dash.into();
		self
	}

	/// Changes the target width.
	pub fn set_width(&mut self, width: usize) -> &mut Self {
		self.width = width;
		self
	}

	/// Replaces the text with the resource at `location`.
	///
	/// The text is left unchanged on failure.
	pub fn load_from(&mut self, loader: &dyn ContentLoader, location: &str) -> Result<&mut Self> {
		self.text = loader.load_text(location)?;
		Ok(self)
	}

	/// Returns the number of dashes before and after the text.
	///
	/// `spare = width - len - 2`, split as `spare / 2 - 1` on the left and
	/// `spare / 2 + spare % 2` on the right, both clamped at zero.
	pub fn padding(&self) -> (usize, usize) {
		let width = i64::try_from(self.width).unwrap_or(i64::MAX);
		let len = i64::try_from(self.text.chars().count()).unwrap_or(i64::MAX);
		let spare = width.saturating_sub(len).saturating_sub(2);
		let half = spare / 2;
		let rem = spare % 2;
		let clamp = |n: i64| usize::try_from(n).unwrap_or(0);
		(clamp(half - 1), clamp(half + rem))
	}
}

impl Render for Comment {
	fn render_into(&self, _level: usize, output: &mut String) {
		let (left, right) = self.padding();
		output.push_str("\n\n<!-- ");
		output.push_str(&self.dash.repeat(left));
		output.push(' ');
		output.push_str(&self.text);
		output.push(' ');
		output.push_str(&self.dash.repeat(right));
		output.push_str(" -->\n");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("hi", 10, (2, 3))]
	#[case("hi", 11, (2, 4))]
	#[case("section", 40, (14, 16))]
	#[case("a long comment text", 4, (0, 0))]
	#[case("", 0, (0, 0))]
	fn test_padding(#[case] text: &str, #[case] width: usize, #[case] expected: (usize, usize)) {
		assert_eq!(Comment::new(text, width, "-").padding(), expected);
	}

	#[rstest]
	fn test_render_ignores_level() {
		let comment = Comment::new("hi", 11, "=");
		let expected = "\n\n<!-- == hi ==== -->\n";
		assert_eq!(comment.render(0), expected);
		assert_eq!(comment.render(5), expected);
	}

	#[rstest]
	fn test_plain_comment() {
		assert_eq!(Comment::plain("note").render(0), "\n\n<!--  note  -->\n");
	}

	#[rstest]
	fn test_width_counts_characters_not_bytes() {
		assert_eq!(Comment::new("éé", 10, "-").padding(), (2, 3));
	}
}
