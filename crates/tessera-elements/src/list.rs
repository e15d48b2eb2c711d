//! Ordered, unordered and description lists.

use tessera_core::{AttributeSet, ContentTree, Node, Render, markup_enum};

use crate::element::{Container, impl_container, render_container};

markup_enum! {
	/// Kind of list, named by its tag
	pub enum ListStyle: "list style" {
		/// `<ul>`
		Unordered => "ul",
		/// `<ol>`
		Ordered => "ol",
		/// `<dl>`
		Description => "dl",
	}
}

markup_enum! {
	/// Kind of list entry, named by its tag
	pub enum ItemKind: "list item" {
		/// `<li>`
		Item => "li",
		/// `<dt>` description term
		Term => "dt",
		/// `<dd>` description details
		Details => "dd",
	}
}

/// A list; items render one level deeper.
///
/// ```
/// use tessera_core::Render;
/// use tessera_elements::{List, ListItem, ListStyle};
///
/// let mut list = List::new(ListStyle::Ordered);
/// list.add_item(ListItem::with_text("first"));
/// assert_eq!(list.render(0), "\n<ol>\n\t<li>first\n\t</li>\n</ol>");
/// ```
#[derive(Debug, Clone)]
pub struct List {
	style: ListStyle,
	attrs: AttributeSet,
	content: ContentTree,
}

impl List {
	/// Creates an empty list.
	pub fn new(style: ListStyle) -> Self {
		Self {
			style,
			attrs: AttributeSet::default(),
			content: ContentTree::default(),
		}
	}

	/// Returns the list style.
	pub fn style(&self) -> ListStyle {
		self.style
	}

	/// Appends an entry; usually a [`ListItem`].
	pub fn add_item(&mut self, item: impl Node + 'static) -> &mut Self {
		self.add_content(item)
	}
}

impl Render for List {
	fn render_into(&self, level: usize, output: &mut String) {
		render_container(output, level, self.style.as_str(), &self.attrs, &self.content, |_| {});
	}
}

/// `<li>`, `<dt>` or `<dd>`.
#[derive(Debug, Clone)]
pub struct ListItem {
	kind: ItemKind,
	attrs: AttributeSet,
	content: ContentTree,
}

impl Default for ListItem {
	fn default() -> Self {
		Self::new(ItemKind::Item)
	}
}

impl ListItem {
	/// Creates an empty entry of the given kind.
	pub fn new(kind: ItemKind) -> Self {
		Self {
			kind,
			attrs: AttributeSet::default(),
			content: ContentTree::default(),
		}
	}

	/// Creates an `<li>` holding `text`.
	pub fn with_text(text: impl Into<String>) -> Self {
		let mut item = Self::default();
		item.content.add(text.into());
		item
	}

	/// Changes the entry kind.
	pub fn set_kind(&mut self, kind: ItemKind) -> &mut Self {
		self.kind = kind;
		self
	}

	/// Returns the entry kind.
	pub fn kind(&self) -> ItemKind {
		self.kind
	}
}

impl Render for ListItem {
	fn render_into(&self, level: usize, output: &mut String) {
		render_container(output, level, self.kind.as_str(), &self.attrs, &self.content, |_| {});
	}
}

impl_container!(List, ListItem);
