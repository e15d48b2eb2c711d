//! Generic flow and sectioning containers.
//!
//! These elements carry only global attributes and child content. Headings
//! and inline frames add a little state on top of the same layout.

use tessera_core::render::push_attr;
use tessera_core::{AttributeSet, ContentTree, MarkupError, Render, Result};

use crate::element::{impl_container, render_container};

macro_rules! plain_container {
	($(
		$(#[$meta:meta])*
		$name:ident => $tag:literal
	),+ $(,)?) => {
		$(
			$(#[$meta])*
			#[derive(Debug, Clone, Default)]
			pub struct $name {
				attrs: AttributeSet,
				content: ContentTree,
			}

			impl $name {
				/// Creates an empty element.
				pub fn new() -> Self {
					Self::default()
				}
			}

			impl Render for $name {
				fn render_into(&self, level: usize, output: &mut String) {
					render_container(output, level, $tag, &self.attrs, &self.content, |_| {});
				}
			}

			impl_container!($name);
		)+
	};
}

plain_container! {
	/// `<div>`
	Div => "div",
	/// `<span>`
	Span => "span",
	/// `<p>`
	Paragraph => "p",
	/// `<article>`
	Article => "article",
	/// `<aside>`
	Aside => "aside",
	/// `<nav>`
	Nav => "nav",
	/// `<main>`
	Main => "main",
	/// `<address>`
	Address => "address",
	/// `<canvas>`
	Canvas => "canvas",
}

/// `<h1>` to `<h6>`.
#[derive(Debug, Clone)]
pub struct Heading {
	rank: u8,
	attrs: AttributeSet,
	content: ContentTree,
}

impl Heading {
	/// Creates a heading of the given rank.
	///
	/// Fails with `InvalidEnumValue` unless `rank` is between 1 and 6.
	pub fn new(rank: u8) -> Result<Self> {
		let mut heading = Self {
			rank: 1,
			attrs: AttributeSet::new(),
			content: ContentTree::new(),
		};
		heading.set_rank(rank)?;
		Ok(heading)
	}

	/// Changes the heading rank, keeping the current one on error.
	pub fn set_rank(&mut self, rank: u8) -> Result<&mut Self> {
		if !(1..=6).contains(&rank) {
			return Err(MarkupError::invalid_value("heading level", rank.to_string()));
		}
		self.rank = rank;
		Ok(self)
	}

	/// Returns the heading rank.
	pub fn rank(&self) -> u8 {
		self.rank
	}
}

impl Render for Heading {
	fn render_into(&self, level: usize, output: &mut String) {
		let tag = format!("h{}", self.rank);
		render_container(output, level, &tag, &self.attrs, &self.content, |_| {});
	}
}

/// `<iframe>` embedding another document.
#[derive(Debug, Clone, Default)]
pub struct Iframe {
	src: String,
	attrs: AttributeSet,
	content: ContentTree,
}

impl Iframe {
	/// Creates a frame showing `src`.
	pub fn new(src: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			..Self::default()
		}
	}

	/// Changes the embedded URL.
	pub fn set_url(&mut self, src: impl Into<String>) -> &mut Self {
		self.src = src.into();
		self
	}
}

impl Render for Iframe {
	fn render_into(&self, level: usize, output: &mut String) {
		render_container(output, level, "iframe", &self.attrs, &self.content, |out| {
			push_attr(out, "src", &self.src);
		});
	}
}

impl_container!(Heading, Iframe);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::element::Container;
	use rstest::rstest;
	use tessera_core::GlobalAttributes;

	#[rstest]
	fn test_div_with_paragraph() {
		let mut paragraph = Paragraph::new();
		paragraph.add_content("Hello");
		let mut div = Div::new();
		div.add_content(paragraph);

		assert_eq!(div.render(0), "\n<div>\n\t<p>Hello\n\t</p>\n</div>");
		assert_eq!(
			div.render(1),
			"\n\t<div>\n\t\t<p>Hello\n\t\t</p>\n\t</div>"
		);
	}

	#[rstest]
	fn test_empty_div_with_id() {
		let mut div = Div::new();
		div.set_id("x");
		assert_eq!(div.render(0), "\n<div id='x'>\n</div>");
	}

	#[rstest]
	#[case(Span::new().render(0), "\n<span>\n</span>")]
	#[case(Article::new().render(0), "\n<article>\n</article>")]
	#[case(Aside::new().render(0), "\n<aside>\n</aside>")]
	#[case(Nav::new().render(0), "\n<nav>\n</nav>")]
	#[case(Main::new().render(0), "\n<main>\n</main>")]
	#[case(Address::new().render(0), "\n<address>\n</address>")]
	#[case(Canvas::new().render(0), "\n<canvas>\n</canvas>")]
	fn test_plain_container_tags(#[case] rendered: String, #[case] expected: &str) {
		assert_eq!(rendered, expected);
	}

	#[rstest]
	#[case(1)]
	#[case(6)]
	fn test_heading_ranks(#[case] rank: u8) {
		let mut heading = Heading::new(rank).unwrap();
		heading.add_content("Title");
		assert_eq!(
			heading.render(0),
			format!("\n<h{rank}>Title\n</h{rank}>")
		);
	}

	#[rstest]
	#[case(0)]
	#[case(7)]
	fn test_heading_rank_out_of_range(#[case] rank: u8) {
		assert_eq!(
			Heading::new(rank).unwrap_err(),
			MarkupError::invalid_value("heading level", rank.to_string())
		);

		let mut heading = Heading::new(2).unwrap();
		assert!(heading.set_rank(rank).is_err());
		assert_eq!(heading.rank(), 2);
	}

	#[rstest]
	fn test_iframe_src_before_global_attributes() {
		let mut frame = Iframe::new("https://example.com");
		frame.set_title("Example");
		assert_eq!(
			frame.render(1),
			"\n\t<iframe src='https://example.com' title='Example'>\n\t</iframe>"
		);
	}

	#[rstest]
	fn test_add_clone_keeps_source_independent() {
		let mut span = Span::new();
		span.add_content("one");
		let mut div = Div::new();
		div.add_clone(&span);
		span.add_content("two");

		assert_eq!(div.render(0), "\n<div>\n\t<span>one\n\t</span>\n</div>");
	}
}
