//! Abbreviations, line breaks and horizontal rules.

use tessera_core::render::push_line;
use tessera_core::{AttributeSet, Render};

use crate::element::impl_attributes;

/// `<abbr>` with its expansion in `title`.
///
/// Renders inline: no newline and no indentation.
#[derive(Debug, Clone, Default)]
pub struct Abbreviation {
	text: String,
	attrs: AttributeSet,
}

impl Abbreviation {
	/// Creates an abbreviation `text` expanding to `title`.
	pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
		let mut attrs = AttributeSet::new();
		attrs.set_title(title);
		Self {
			text: text.into(),
			attrs,
		}
	}

	/// Returns the abbreviated text.
	pub fn text(&self) -> &str {
		&self.text
	}
}

impl Render for Abbreviation {
	fn render_into(&self, _level: usize, output: &mut String) {
		output.push_str("<abbr");
		self.attrs.render_into(output);
		output.push('>');
		output.push_str(&self.text);
		output.push_str("</abbr>");
	}
}

/// `<br/>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineBreak;

impl Render for LineBreak {
	fn render_into(&self, level: usize, output: &mut String) {
		push_line(output, level);
		output.push_str("<br/>");
	}
}

/// `<hr/>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rule;

impl Render for Rule {
	fn render_into(&self, level: usize, output: &mut String) {
		push_line(output, level);
		output.push_str("<hr/>");
	}
}

impl_attributes!(Abbreviation);
