//! Hyperlinks.

use tessera_core::render::push_attr_double;
use tessera_core::{AttributeSet, ContentTree, LinkTarget, Render};

use crate::element::{impl_container, render_container};

/// `<a>` hyperlink.
///
/// `href`, `target`, `type` and `rel` are written with double quotes.
///
/// ```
/// use tessera_core::{LinkTarget, Render};
/// use tessera_elements::{Anchor, Container};
///
/// let mut link = Anchor::new("/docs");
/// link.set_target(LinkTarget::NewPage).add_content("Docs");
/// assert_eq!(
///     link.render(0),
///     "\n<a href=\"/docs\" target=\"_blank\">Docs\n</a>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Anchor {
	href: String,
	target: Option<LinkTarget>,
	mime_type: Option<String>,
	rel: Option<String>,
	attrs: AttributeSet,
	content: ContentTree,
}

impl Anchor {
	/// Creates a link to `href`.
	pub fn new(href: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			..Self::default()
		}
	}

	/// Changes the link destination.
	pub fn set_url(&mut self, href: impl Into<String>) -> &mut Self {
		self.href = href.into();
		self
	}

	/// Returns the link destination.
	pub fn url(&self) -> &str {
		&self.href
	}

	/// Sets the browsing context the link opens in.
	pub fn set_target(&mut self, target: LinkTarget) -> &mut Self {
		self.target = Some(target);
		self
	}

	/// Sets the MIME type hint of the linked resource.
	pub fn set_type(&mut self, mime_type: impl Into<String>) -> &mut Self {
		self.mime_type = Some(mime_type.into());
		self
	}

	/// Sets the relationship to the linked resource (e.g. `noopener`).
	pub fn set_relation(&mut self, rel: impl Into<String>) -> &mut Self {
		self.rel = Some(rel.into());
		self
	}
}

impl Render for Anchor {
	fn render_into(&self, level: usize, output: &mut String) {
		render_container(output, level, "a", &self.attrs, &self.content, |out| {
			// href is always present, even when empty
			out.push_str(" href=\"");
			out.push_str(&self.href);
			out.push('"');
			if let Some(target) = self.target {
				push_attr_double(out, "target", target.as_str());
			}
			push_attr_double(out, "type", self.mime_type.as_deref().unwrap_or_default());
			push_attr_double(out, "rel", self.rel.as_deref().unwrap_or_default());
		});
	}
}

impl_container!(Anchor);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::element::Container;
	use rstest::rstest;
	use tessera_core::GlobalAttributes;

	#[rstest]
	fn test_anchor_attribute_order() {
		let mut link = Anchor::new("https://example.com/a.pdf");
		link.set_relation("noopener")
			.set_type("application/pdf")
			.set_target(LinkTarget::SamePage)
			.set_id("dl")
			.add_content("Download");

		assert_eq!(
			link.render(1),
			"\n\t<a href=\"https://example.com/a.pdf\" target=\"_self\" type=\"application/pdf\" \
			 rel=\"noopener\" id='dl'>Download\n\t</a>"
		);
	}

	#[rstest]
	fn test_anchor_empty_href_is_kept() {
		assert_eq!(Anchor::new("").render(0), "\n<a href=\"\">\n</a>");
	}
}
