//! The `<body>` section.

use tessera_core::render::{close_tag, open_tag};
use tessera_core::{AttributeSet, ContentTree, GlobalAttributes, Render};
use tessera_elements::Container;

use crate::head::Script;

/// The `<body>` section: page content followed by deferred scripts and then
/// inline command scripts.
///
/// ```
/// use tessera_core::{GlobalAttributes, Render};
/// use tessera_document::Body;
/// use tessera_elements::Container;
///
/// let mut body = Body::new();
/// body.set_id("app").add_content("Loading");
/// body.add_command("start();");
///
/// assert_eq!(
///     body.render(0),
///     "\n<body id='app'>Loading\n\t<script type='text/javascript'>start();</script>\n</body>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Body {
	attrs: AttributeSet,
	content: ContentTree,
	scripts: Vec<Script>,
	commands: Vec<Script>,
}

impl Body {
	/// Creates an empty body.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an external script loaded after the content.
	pub fn add_script(&mut self, src: impl Into<String>, crossorigin: Option<String>) -> &mut Self {
		self.scripts.push(Script::external(src, crossorigin));
		self
	}

	/// Appends inline code run after every external body script.
	pub fn add_command(&mut self, code: impl Into<String>) -> &mut Self {
		self.commands.push(Script::inline(code));
		self
	}

	/// Returns the deferred external scripts.
	pub fn scripts(&self) -> &[Script] {
		&self.scripts
	}

	/// Returns the inline command scripts.
	pub fn commands(&self) -> &[Script] {
		&self.commands
	}
}

impl Render for Body {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "body");
		self.attrs.render_into(output);
		output.push('>');
		self.content.render_into(level, output);
		for script in self.scripts.iter().chain(&self.commands) {
			script.render_into(level + 1, output);
		}
		close_tag(output, level, "body");
	}
}

impl GlobalAttributes for Body {
	fn attributes(&self) -> &AttributeSet {
		&self.attrs
	}

	fn attributes_mut(&mut self) -> &mut AttributeSet {
		&mut self.attrs
	}
}

impl Container for Body {
	fn content(&self) -> &ContentTree {
		&self.content
	}

	fn content_mut(&mut self) -> &mut ContentTree {
		&mut self.content
	}
}
