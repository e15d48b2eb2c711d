//! The `<head>` section and its children.
//!
//! Head children are void or text-only tags written one per line, one level
//! deeper than `<head>` itself.

use tessera_core::render::{close_tag, open_tag, push_attr, push_line, push_opt_attr};
use tessera_core::{AttributeSet, Charset, GlobalAttributes, LinkTarget, Render};

use crate::media::MediaQuery;

/// `<title>`, omitted entirely when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
	text: String,
}

impl Title {
	/// Creates a title.
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	/// Returns the title text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Replaces the title text.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
	}
}

impl Render for Title {
	fn render_into(&self, level: usize, output: &mut String) {
		if self.text.is_empty() {
			return;
		}
		push_line(output, level);
		output.push_str("<title>");
		output.push_str(&self.text);
		output.push_str("</title>");
	}
}

/// `<link>` to an external resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
	rel: String,
	href: String,
	id: Option<String>,
	media: Option<MediaQuery>,
}

impl Link {
	/// Creates a link with relationship `rel`.
	pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			rel: rel.into(),
			href: href.into(),
			id: None,
			media: None,
		}
	}

	/// Creates a stylesheet link, optionally limited to `media`.
	pub fn stylesheet(href: impl Into<String>, media: Option<MediaQuery>) -> Self {
		Self {
			media,
			..Self::new("stylesheet", href)
		}
	}

	/// Creates a favicon link.
	pub fn icon(href: impl Into<String>) -> Self {
		Self::new("icon", href)
	}

	/// Returns the relationship.
	pub fn rel(&self) -> &str {
		&self.rel
	}

	/// Returns the target URL.
	pub fn href(&self) -> &str {
		&self.href
	}

	/// Sets the `id` attribute.
	pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
		self.id = Some(id.into());
		self
	}

	/// Limits the link to a media query.
	pub fn set_media(&mut self, media: MediaQuery) -> &mut Self {
		self.media = Some(media);
		self
	}
}

impl Render for Link {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "link");
		// rel and href are always written
		output.push_str(" rel='");
		output.push_str(&self.rel);
		output.push_str("' href='");
		output.push_str(&self.href);
		output.push('\'');
		push_opt_attr(output, "id", self.id.as_deref());
		if self.rel == "icon" {
			push_attr(output, "type", "image/gif");
		}
		if let Some(media) = &self.media {
			push_attr(output, "media", &media.to_string());
		}
		output.push_str("/>");
	}
}

/// `<meta>` data.
///
/// ```
/// use tessera_core::Render;
/// use tessera_document::Meta;
///
/// let meta = Meta::named("keywords", "html, builder");
/// assert_eq!(meta.render(1), "\n\t<meta content='html, builder' name='keywords'/>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Meta {
	charset: Option<Charset>,
	http_equiv: Option<String>,
	contents: Vec<String>,
	attrs: AttributeSet,
}

impl Meta {
	/// Creates an empty meta tag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates `<meta name='..' content='..'/>`.
	pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
		let mut meta = Self::new();
		meta.attrs.set_name(name);
		meta.contents.push(content.into());
		meta
	}

	/// Creates `<meta charset='..'/>`.
	pub fn charset(charset: Charset) -> Self {
		Self {
			charset: Some(charset),
			..Self::default()
		}
	}

	/// Creates `<meta http-equiv='..' content='..'/>`.
	pub fn http_equiv(header: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			http_equiv: Some(header.into()),
			contents: vec![content.into()],
			..Self::default()
		}
	}

	/// Sets the `charset` attribute.
	pub fn set_charset(&mut self, charset: Charset) -> &mut Self {
		self.charset = Some(charset);
		self
	}

	/// Sets the `http-equiv` attribute.
	pub fn set_http_equiv(&mut self, header: impl Into<String>) -> &mut Self {
		self.http_equiv = Some(header.into());
		self
	}

	/// Appends a value to the comma-separated `content` attribute.
	pub fn add_content(&mut self, content: impl Into<String>) -> &mut Self {
		self.contents.push(content.into());
		self
	}
}

impl Render for Meta {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "meta");
		push_opt_attr(output, "charset", self.charset.map(|c| c.as_str()));
		push_opt_attr(output, "http-equiv", self.http_equiv.as_deref());
		if !self.contents.is_empty() {
			push_attr(output, "content", &self.contents.join(", "));
		}
		self.attrs.render_into(output);
		output.push_str("/>");
	}
}

impl GlobalAttributes for Meta {
	fn attributes(&self) -> &AttributeSet {
		&self.attrs
	}

	fn attributes_mut(&mut self) -> &mut AttributeSet {
		&mut self.attrs
	}
}

/// A `<script>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Script {
	/// `<script src='..'>`; `type='text/javascript'` is written unless a
	/// `crossorigin` mode is set
	External {
		/// Script URL
		src: String,
		/// CORS mode (`anonymous`, `use-credentials`)
		crossorigin: Option<String>,
	},
	/// Inline code, written unescaped
	Inline(String),
}

impl Script {
	/// Creates an external script.
	pub fn external(src: impl Into<String>, crossorigin: Option<String>) -> Self {
		Self::External {
			src: src.into(),
			crossorigin,
		}
	}

	/// Creates an inline script.
	pub fn inline(code: impl Into<String>) -> Self {
		Self::Inline(code.into())
	}
}

impl Render for Script {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "script");
		match self {
			Self::External { src, crossorigin } => {
				if crossorigin.is_none() {
					push_attr(output, "type", "text/javascript");
				}
				output.push_str(" src='");
				output.push_str(src);
				output.push('\'');
				push_opt_attr(output, "crossorigin", crossorigin.as_deref());
				output.push('>');
			}
			Self::Inline(code) => {
				push_attr(output, "type", "text/javascript");
				output.push('>');
				output.push_str(code);
			}
		}
		output.push_str("</script>");
	}
}

/// The `<head>` section.
#[derive(Debug, Clone, Default)]
pub struct Head {
	pub(crate) title: Title,
	pub(crate) base: Option<String>,
	pub(crate) base_target: Option<LinkTarget>,
	pub(crate) metas: Vec<Meta>,
	pub(crate) links: Vec<Link>,
	pub(crate) scripts: Vec<Script>,
}

impl Head {
	/// Creates a head with the given title.
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: Title::new(title),
			..Self::default()
		}
	}

	/// Returns the title.
	pub fn title(&self) -> &Title {
		&self.title
	}

	/// Returns the title mutably.
	pub fn title_mut(&mut self) -> &mut Title {
		&mut self.title
	}

	/// Sets the base URL for relative links.
	pub fn set_base(&mut self, href: impl Into<String>) -> &mut Self {
		self.base = Some(href.into());
		self
	}

	/// Sets the default browsing context for links.
	pub fn set_base_target(&mut self, target: LinkTarget) -> &mut Self {
		self.base_target = Some(target);
		self
	}

	/// Appends a meta tag.
	pub fn add_meta(&mut self, meta: Meta) -> &mut Self {
		self.metas.push(meta);
		self
	}

	/// Appends a link.
	pub fn add_link(&mut self, link: Link) -> &mut Self {
		self.links.push(link);
		self
	}

	/// Appends a script.
	pub fn add_script(&mut self, script: Script) -> &mut Self {
		self.scripts.push(script);
		self
	}

	/// Returns the meta tags in order.
	pub fn metas(&self) -> &[Meta] {
		&self.metas
	}

	/// Returns the links in order.
	pub fn links(&self) -> &[Link] {
		&self.links
	}

	/// Returns the scripts in order.
	pub fn scripts(&self) -> &[Script] {
		&self.scripts
	}
}

impl Render for Head {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "head");
		output.push('>');
		self.title.render_into(level + 1, output);
		if self.base.is_some() || self.base_target.is_some() {
			open_tag(output, level + 1, "base");
			push_opt_attr(output, "href", self.base.as_deref());
			push_opt_attr(output, "target", self.base_target.map(|t| t.as_str()));
			output.push_str("/>");
		}
		for meta in &self.metas {
			meta.render_into(level + 1, output);
		}
		for link in &self.links {
			link.render_into(level + 1, output);
		}
		for script in &self.scripts {
			script.render_into(level + 1, output);
		}
		close_tag(output, level, "head");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_title_is_omitted() {
		assert_eq!(Head::new("").render(0), "\n<head>\n</head>");
	}

	#[rstest]
	fn test_head_child_order() {
		let mut head = Head::new("Docs");
		head.add_script(Script::external("/app.js", None))
			.add_link(Link::icon("/favicon.gif"))
			.add_meta(Meta::charset(Charset::Utf8))
			.set_base_target(LinkTarget::NewPage)
			.set_base("https://example.com/");

		assert_eq!(
			head.render(0),
			"\n<head>\
			 \n\t<title>Docs</title>\
			 \n\t<base href='https://example.com/' target='_blank'/>\
			 \n\t<meta charset='UTF-8'/>\
			 \n\t<link rel='icon' href='/favicon.gif' type='image/gif'/>\
			 \n\t<script type='text/javascript' src='/app.js'></script>\
			 \n</head>"
		);
	}

	#[rstest]
	fn test_base_target_only() {
		let mut head = Head::new("");
		head.set_base_target(LinkTarget::Top);
		assert_eq!(head.render(0), "\n<head>\n\t<base target='_top'/>\n</head>");
	}

	#[rstest]
	fn test_stylesheet_with_media_and_id() {
		let mut media = MediaQuery::new("screen");
		media.set_max_width(600);
		let mut link = Link::stylesheet("/mobile.css", Some(media));
		link.set_id("mobile");

		assert_eq!(
			link.render(1),
			"\n\t<link rel='stylesheet' href='/mobile.css' id='mobile' \
			 media='screen and (max-width:600px)'/>"
		);
	}

	#[rstest]
	fn test_crossorigin_script_has_no_type() {
		let script = Script::external("https://cdn.example/lib.js", Some("anonymous".into()));
		assert_eq!(
			script.render(1),
			"\n\t<script src='https://cdn.example/lib.js' crossorigin='anonymous'></script>"
		);
	}

	#[rstest]
	fn test_inline_script_is_not_escaped() {
		let script = Script::inline("if (a < b) { go(); }");
		assert_eq!(
			script.render(1),
			"\n\t<script type='text/javascript'>if (a < b) { go(); }</script>"
		);
	}

	#[rstest]
	fn test_meta_http_equiv_with_several_contents() {
		let mut meta = Meta::http_equiv("Cache-Control", "no-cache");
		meta.add_content("no-store");
		assert_eq!(
			meta.render(1),
			"\n\t<meta http-equiv='Cache-Control' content='no-cache, no-store'/>"
		);
	}
}
