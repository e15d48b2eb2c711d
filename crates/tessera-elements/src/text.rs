//! Text and code fragments.
//!
//! Unlike other elements these render inline: plain text is written verbatim
//! with no newline or indentation. Only the preformatted variants open on a
//! new, indented line.

use tessera_core::render::{html_escape, push_attr, push_line, push_opt_attr};
use tessera_core::{ContentLoader, Render, Result};

fn push_id_and_classes(output: &mut String, id: Option<&str>, classes: &[String]) {
	push_opt_attr(output, "id", id);
	if !classes.is_empty() {
		push_attr(output, "class", &classes.join(" "));
	}
}

/// A run of text, optionally strong or preformatted.
///
/// ```
/// use tessera_core::Render;
/// use tessera_elements::Text;
///
/// let mut text = Text::new("Warning");
/// text.set_strong(true);
/// assert_eq!(text.render(3), "<strong>Warning</strong>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
	text: String,
	id: Option<String>,
	classes: Vec<String>,
	preformatted: bool,
	strong: bool,
}

impl Text {
	/// Creates a text node written verbatim.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}

	/// Creates a text node with HTML special characters escaped.
	pub fn escaped(text: &str) -> Self {
		Self::new(html_escape(text))
	}

	/// Replaces the text.
	pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.text = text.into();
		self
	}

	/// Returns the text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Sets the id of the `<pre>` wrapper.
	pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
		self.id = Some(id.into());
		self
	}

	/// Returns the id of the `<pre>` wrapper.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Adds a class to the `<pre>` wrapper.
	pub fn add_class(&mut self, class: impl Into<String>) -> &mut Self {
		self.classes.push(class.into());
		self
	}

	/// Wraps the text in a `<pre>` block.
	pub fn preformat(&mut self, preformatted: bool) -> &mut Self {
		self.preformatted = preformatted;
		self
	}

	/// Wraps the text in `<strong>`.
	pub fn set_strong(&mut self, strong: bool) -> &mut Self {
		self.strong = strong;
		self
	}

	/// Replaces the text with the resource at `location`.
	///
	/// The text is left unchanged on failure.
	pub fn load_from(&mut self, loader: &dyn ContentLoader, location: &str) -> Result<&mut Self> {
		self.text = loader.load_text(location)?;
		Ok(self)
	}
}

impl Render for Text {
	fn render_into(&self, level: usize, output: &mut String) {
		if self.preformatted {
			push_line(output, level);
			output.push_str("<pre");
			push_id_and_classes(output, self.id.as_deref(), &self.classes);
			output.push('>');
		}
		if self.strong {
			output.push_str("<strong>");
		}
		output.push_str(&self.text);
		if self.strong {
			output.push_str("</strong>");
		}
		if self.preformatted {
			output.push_str("</pre>");
		}
	}
}

impl From<&str> for Text {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for Text {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

/// Source code, inline or as a `<pre><code>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code {
	text: String,
	id: Option<String>,
	classes: Vec<String>,
	preformatted: bool,
}

impl Code {
	/// Creates a code fragment written verbatim.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}

	/// Replaces the code.
	pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.text = text.into();
		self
	}

	/// Returns the code.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Appends a line, separated from existing code by a newline.
	pub fn add_line(&mut self, line: &str) -> &mut Self {
		if !self.text.is_empty() {
			self.text.push('\n');
		}
		self.text.push_str(line);
		self
	}

	/// Sets the id of the `<code>` element.
	pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
		self.id = Some(id.into());
		self
	}

	/// Adds a class to the `<code>` element (e.g. `language-rust`).
	pub fn add_class(&mut self, class: impl Into<String>) -> &mut Self {
		self.classes.push(class.into());
		self
	}

	/// Wraps the code in `<pre><code>`.
	pub fn preformat(&mut self, preformatted: bool) -> &mut Self {
		self.preformatted = preformatted;
		self
	}

	/// Replaces the code with the resource at `location`.
	///
	/// The code is left unchanged on failure.
	pub fn load_from(&mut self, loader: &dyn ContentLoader, location: &str) -> Result<&mut Self> {
		self.text = loader.load_text(location)?;
		Ok(self)
	}
}

impl Render for Code {
	fn render_into(&self, level: usize, output: &mut String) {
		if self.preformatted {
			push_line(output, level);
			output.push_str("<pre><code");
			push_id_and_classes(output, self.id.as_deref(), &self.classes);
			output.push('>');
		}
		output.push_str(&self.text);
		if self.preformatted {
			output.push_str("</code></pre>");
		}
	}
}
