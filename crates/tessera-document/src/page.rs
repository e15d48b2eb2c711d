//! Whole-document composition.
//!
//! A [`Page`] owns exactly one [`Head`] and one [`Body`]. It is built with
//! append-only calls and rendered in one pass:
//!
//! ```text
//! <!DOCTYPE html>
//! <html xmlns='http://www.w3.org/1999/xhtml' lang='en'>
//! <head> ... </head>
//! <body> ... </body>
//! </html>
//! ```

use std::fmt;
use std::io::{self, Write};

use tessera_core::{Charset, LinkTarget, Node, Render, markup_enum};
use tessera_elements::Container;

use crate::body::Body;
use crate::head::{Head, Link, Meta, Script};
use crate::media::MediaQuery;

/// XML namespace written on the `<html>` element.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Language used when none is set.
pub const DEFAULT_LANGUAGE: &str = "en";

const MOBILE_VIEWPORT: &str = "height=device-height, width=device-width, initial-scale=1.0, \
	minimum-scale=1.0, maximum-scale=1.0, user-scalable=no";

markup_enum! {
	/// Where [`Page::add_script`] places a script
	pub enum ScriptPlacement: "script placement" {
		/// External script in `<head>`
		Head => "head",
		/// External script at the end of `<body>`
		Body => "body",
		/// Inline code at the very end of `<body>`
		Command => "command",
	}
}

impl Default for ScriptPlacement {
	fn default() -> Self {
		Self::Head
	}
}

/// A complete HTML document.
///
/// ```
/// use tessera_document::Page;
/// use tessera_elements::{Container, Div, Paragraph};
///
/// let mut paragraph = Paragraph::new();
/// paragraph.add_content("Hello");
/// let mut div = Div::new();
/// div.add_content(paragraph);
///
/// let mut page = Page::new("Test");
/// page.add_content(div);
///
/// assert_eq!(
///     page.render(),
///     "<!DOCTYPE html>\
///      \n<html xmlns='http://www.w3.org/1999/xhtml' lang='en'>\
///      \n<head>\
///      \n\t<title>Test</title>\
///      \n</head>\
///      \n<body>\
///      \n\t<div>\
///      \n\t\t<p>Hello\
///      \n\t\t</p>\
///      \n\t</div>\
///      \n</body>\
///      \n</html>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Page {
	lang: String,
	head: Head,
	body: Body,
}

impl Page {
	/// Creates an English page with the given title.
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			lang: DEFAULT_LANGUAGE.to_string(),
			head: Head::new(title),
			body: Body::new(),
		}
	}

	/// Returns the document language.
	pub fn language(&self) -> &str {
		&self.lang
	}

	/// Sets the document language written on `<html>`.
	pub fn set_language(&mut self, lang: impl Into<String>) -> &mut Self {
		self.lang = lang.into();
		self
	}

	/// Replaces the page title.
	pub fn change_title(&mut self, title: impl Into<String>) -> &mut Self {
		self.head.title_mut().set_text(title);
		self
	}

	/// Adds the viewport meta tag for mobile devices.
	pub fn setup_mobile(&mut self) -> &mut Self {
		self.head.add_meta(Meta::named("viewport", MOBILE_VIEWPORT));
		self
	}

	/// Declares the document encoding.
	pub fn set_charset(&mut self, charset: Charset) -> &mut Self {
		self.head.add_meta(Meta::charset(charset));
		self
	}

	/// Tells browsers and proxies not to cache the page.
	pub fn set_no_cache(&mut self) -> &mut Self {
		let mut cache_control = Meta::http_equiv("Cache-Control", "no-cache");
		cache_control.add_content("no-store").add_content("must-revalidate");
		self.head
			.add_meta(cache_control)
			.add_meta(Meta::http_equiv("Pragma", "no-cache"))
			.add_meta(Meta::http_equiv("Expires", "0"));
		self
	}

	/// Sets the base URL for relative links.
	pub fn set_base(&mut self, href: impl Into<String>) -> &mut Self {
		self.head.set_base(href);
		self
	}

	/// Sets the default browsing context for links.
	pub fn set_base_target(&mut self, target: LinkTarget) -> &mut Self {
		self.head.set_base_target(target);
		self
	}

	/// Links a stylesheet, optionally limited to a media query.
	pub fn add_stylesheet(
		&mut self,
		href: impl Into<String>,
		media: Option<MediaQuery>,
	) -> &mut Self {
		self.head.add_link(Link::stylesheet(href, media));
		self
	}

	/// Sets the favicon.
	pub fn set_icon(&mut self, href: impl Into<String>) -> &mut Self {
		self.head.add_link(Link::icon(href));
		self
	}

	/// Appends an arbitrary link to the head.
	pub fn add_link(&mut self, link: Link) -> &mut Self {
		self.head.add_link(link);
		self
	}

	/// Appends a meta tag to the head.
	pub fn add_meta(&mut self, meta: Meta) -> &mut Self {
		self.head.add_meta(meta);
		self
	}

	/// Adds a script.
	///
	/// For [`ScriptPlacement::Command`] `source` is inline code and
	/// `crossorigin` is ignored; otherwise it is the script URL.
	pub fn add_script(
		&mut self,
		placement: ScriptPlacement,
		source: impl Into<String>,
		crossorigin: Option<String>,
	) -> &mut Self {
		match placement {
			ScriptPlacement::Head => {
				self.head.add_script(Script::external(source, crossorigin));
			}
			ScriptPlacement::Body => {
				self.body.add_script(source, crossorigin);
			}
			ScriptPlacement::Command => {
				self.body.add_command(source);
			}
		}
		self
	}

	/// Appends a node to the body, taking ownership of it.
	pub fn add_content(&mut self, node: impl Node + 'static) -> &mut Self {
		self.body.add_content(node);
		self
	}

	/// Appends a deep copy of `node` to the body.
	pub fn add_clone(&mut self, node: &dyn Node) -> &mut Self {
		self.body.add_clone(node);
		self
	}

	/// Returns the head.
	pub fn head(&self) -> &Head {
		&self.head
	}

	/// Returns the head mutably.
	pub fn head_mut(&mut self) -> &mut Head {
		&mut self.head
	}

	/// Returns the body.
	pub fn body(&self) -> &Body {
		&self.body
	}

	/// Returns the body mutably, e.g. to set body attributes.
	pub fn body_mut(&mut self) -> &mut Body {
		&mut self.body
	}

	/// Renders the whole document.
	pub fn render(&self) -> String {
		let mut output = String::from("<!DOCTYPE html>");
		output.push_str("\n<html xmlns='");
		output.push_str(XHTML_NAMESPACE);
		output.push_str("' lang='");
		output.push_str(&self.lang);
		output.push_str("'>");
		self.head.render_into(0, &mut output);
		self.body.render_into(0, &mut output);
		output.push_str("\n</html>");

		tracing::debug!(
			title = self.head.title().text(),
			bytes = output.len(),
			"rendered page"
		);
		output
	}

	/// Writes the rendered document to `writer`.
	pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
		writer.write_all(self.render().as_bytes())?;
		writer.flush()
	}

	/// Writes the rendered document to standard output.
	pub fn show(&self) -> io::Result<()> {
		self.write_to(io::stdout().lock())
	}
}

impl Default for Page {
	fn default() -> Self {
		Self::new("")
	}
}

impl fmt::Display for Page {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use tessera_core::GlobalAttributes;
	use tessera_elements::{Div, Paragraph};

	const SKELETON_START: &str =
		"<!DOCTYPE html>\n<html xmlns='http://www.w3.org/1999/xhtml' lang='en'>";

	#[fixture]
	fn page() -> Page {
		Page::new("Test")
	}

	#[rstest]
	fn test_empty_page(page: Page) {
		assert_eq!(
			page.render(),
			format!(
				"{SKELETON_START}\n<head>\n\t<title>Test</title>\n</head>\n<body>\n</body>\n</html>"
			)
		);
	}

	#[rstest]
	fn test_language_and_title_changes(mut page: Page) {
		page.set_language("hu").change_title("Teszt");

		let html = page.render();
		assert!(html.contains("<html xmlns='http://www.w3.org/1999/xhtml' lang='hu'>"));
		assert!(html.contains("\n\t<title>Teszt</title>"));
		assert_eq!(page.language(), "hu");
	}

	#[rstest]
	fn test_mobile_viewport(mut page: Page) {
		page.setup_mobile();
		assert!(page.render().contains(
			"\n\t<meta content='height=device-height, width=device-width, initial-scale=1.0, \
			 minimum-scale=1.0, maximum-scale=1.0, user-scalable=no' name='viewport'/>"
		));
	}

	#[rstest]
	fn test_no_cache_metas(mut page: Page) {
		page.set_no_cache();
		assert!(page.render().contains(
			"\n\t<meta http-equiv='Cache-Control' content='no-cache, no-store, must-revalidate'/>\
			 \n\t<meta http-equiv='Pragma' content='no-cache'/>\
			 \n\t<meta http-equiv='Expires' content='0'/>"
		));
	}

	#[rstest]
	fn test_charset_is_honored(mut page: Page) {
		page.set_charset(Charset::Windows1252);
		assert!(page.render().contains("\n\t<meta charset='Windows-1252'/>"));
	}

	#[rstest]
	fn test_script_placements(mut page: Page) {
		page.add_script(ScriptPlacement::Command, "boot();", None)
			.add_script(ScriptPlacement::Body, "/body.js", None)
			.add_script(
				ScriptPlacement::Head,
				"https://cdn.example/lib.js",
				Some("anonymous".to_string()),
			);

		assert_eq!(
			page.render(),
			format!(
				"{SKELETON_START}\
				 \n<head>\
				 \n\t<title>Test</title>\
				 \n\t<script src='https://cdn.example/lib.js' crossorigin='anonymous'></script>\
				 \n</head>\
				 \n<body>\
				 \n\t<script type='text/javascript' src='/body.js'></script>\
				 \n\t<script type='text/javascript'>boot();</script>\
				 \n</body>\
				 \n</html>"
			)
		);
	}

	#[rstest]
	fn test_head_link_order(mut page: Page) {
		let mut print = MediaQuery::new("print");
		print.set_min_width(300);
		page.set_icon("/favicon.gif")
			.add_stylesheet("/site.css", None)
			.add_stylesheet("/print.css", Some(print));

		assert!(page.render().contains(
			"\n\t<link rel='icon' href='/favicon.gif' type='image/gif'/>\
			 \n\t<link rel='stylesheet' href='/site.css'/>\
			 \n\t<link rel='stylesheet' href='/print.css' media='print and (min-width:300px)'/>"
		));
	}

	#[rstest]
	fn test_body_attributes_through_body_mut(mut page: Page) {
		page.body_mut().add_class("dark");
		assert!(page.render().contains("\n<body class='dark'>"));
	}

	#[rstest]
	fn test_added_clone_is_detached(mut page: Page) {
		let mut paragraph = Paragraph::new();
		paragraph.add_content("Original");
		page.add_clone(&paragraph);
		paragraph.add_content(" changed");

		let html = page.render();
		assert!(html.contains("\n\t<p>Original\n\t</p>"));
		assert!(!html.contains("changed"));
	}

	#[rstest]
	fn test_display_and_write_to_match_render(mut page: Page) {
		page.add_content(Div::new());
		let mut buffer = Vec::new();
		page.write_to(&mut buffer).unwrap();

		assert_eq!(String::from_utf8(buffer).unwrap(), page.render());
		assert_eq!(page.to_string(), page.render());
	}

	#[rstest]
	#[case("head", ScriptPlacement::Head)]
	#[case("body", ScriptPlacement::Body)]
	#[case("command", ScriptPlacement::Command)]
	fn test_placement_from_str(#[case] input: &str, #[case] expected: ScriptPlacement) {
		assert_eq!(input.parse::<ScriptPlacement>().unwrap(), expected);
	}
}
