//! Ordered child content of an element.

use std::fmt;

use crate::node::{Node, Render};

/// Ordered, owned sequence of child nodes.
///
/// Children render one level deeper than the owning element, in insertion
/// order, concatenated without separators.
///
/// ```
/// use tessera_core::ContentTree;
///
/// let mut content = ContentTree::new();
/// content.add("Hello");
/// content.add(String::from(", world"));
///
/// assert_eq!(content.len(), 2);
/// assert_eq!(content.render(0), "Hello, world");
/// ```
#[derive(Clone, Default)]
pub struct ContentTree {
	children: Vec<Box<dyn Node>>,
}

impl ContentTree {
	/// Creates an empty tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a node, taking ownership of it.
	pub fn add(&mut self, node: impl Node + 'static) -> &mut Self {
		self.children.push(Box::new(node));
		self
	}

	/// Appends an already boxed node.
	pub fn add_boxed(&mut self, node: Box<dyn Node>) -> &mut Self {
		self.children.push(node);
		self
	}

	/// Appends a deep copy of `node`, leaving the caller's value untouched.
	pub fn add_clone(&mut self, node: &dyn Node) -> &mut Self {
		self.children.push(node.clone_node());
		self
	}

	/// Returns the number of direct children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Returns true if there are no children.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Iterates over the direct children in render order.
	pub fn iter(&self) -> impl Iterator<Item = &dyn Node> {
		self.children.iter().map(|child| child.as_ref())
	}

	/// Removes every child.
	pub fn clear(&mut self) {
		self.children.clear();
	}

	/// Renders every child at `level + 1`.
	pub fn render_into(&self, level: usize, output: &mut String) {
		for child in &self.children {
			child.render_into(level + 1, output);
		}
	}

	/// Returns the children rendered at `level + 1`.
	pub fn render(&self, level: usize) -> String {
		let mut output = String::new();
		self.render_into(level, &mut output);
		output
	}
}

impl Render for ContentTree {
	fn render_into(&self, level: usize, output: &mut String) {
		ContentTree::render_into(self, level, output);
	}
}

impl fmt::Debug for ContentTree {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.children.iter()).finish()
	}
}

impl<N: Node + 'static> Extend<N> for ContentTree {
	fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
		for node in iter {
			self.add(node);
		}
	}
}

impl<N: Node + 'static> FromIterator<N> for ContentTree {
	fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
		let mut content = Self::new();
		content.extend(iter);
		content
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::render::{close_tag, open_tag};
	use rstest::{fixture, rstest};

	#[derive(Debug, Clone)]
	struct Wrap {
		tag: &'static str,
		content: ContentTree,
	}

	impl Wrap {
		fn new(tag: &'static str) -> Self {
			Self {
				tag,
				content: ContentTree::new(),
			}
		}
	}

	impl Render for Wrap {
		fn render_into(&self, level: usize, output: &mut String) {
			open_tag(output, level, self.tag);
			output.push('>');
			self.content.render_into(level, output);
			close_tag(output, level, self.tag);
		}
	}

	#[fixture]
	fn nested() -> Wrap {
		let mut paragraph = Wrap::new("p");
		paragraph.content.add("Hello");
		let mut div = Wrap::new("div");
		div.content.add(paragraph);
		div
	}

	#[rstest]
	fn test_empty_tree_renders_nothing() {
		let content = ContentTree::new();
		assert!(content.is_empty());
		assert_eq!(content.render(3), "");
	}

	#[rstest]
	fn test_children_render_one_level_deeper(nested: Wrap) {
		let mut content = ContentTree::new();
		content.add(nested);

		assert_eq!(content.render(0), "\n\t<div>\n\t\t<p>Hello\n\t\t</p>\n\t</div>");
	}

	#[rstest]
	fn test_same_node_renders_at_different_levels(nested: Wrap) {
		assert_eq!(nested.render(0), "\n<div>\n\t<p>Hello\n\t</p>\n</div>");
		assert_eq!(
			nested.render(2),
			"\n\t\t<div>\n\t\t\t<p>Hello\n\t\t\t</p>\n\t\t</div>"
		);
	}

	#[rstest]
	fn test_insertion_order_is_render_order() {
		let content: ContentTree = ["a", "b", "c"].into_iter().collect();
		assert_eq!(content.len(), 3);
		assert_eq!(content.render(0), "abc");
	}

	#[rstest]
	fn test_add_clone_is_independent(nested: Wrap) {
		let mut original = nested;
		let mut content = ContentTree::new();
		content.add_clone(&original);

		original.content.add(" again");

		assert_eq!(content.render(0), "\n\t<div>\n\t\t<p>Hello\n\t\t</p>\n\t</div>");
	}

	#[rstest]
	fn test_cloned_tree_does_not_alias(nested: Wrap) {
		let mut first = ContentTree::new();
		first.add(nested);
		let mut second = first.clone();
		second.add("tail");

		assert_eq!(first.len(), 1);
		assert_eq!(second.len(), 2);
		assert!(second.render(0).ends_with("</div>tail"));
	}

	#[rstest]
	fn test_render_is_idempotent(nested: Wrap) {
		let mut content = ContentTree::new();
		content.add(nested).add("x");
		assert_eq!(content.render(1), content.render(1));
	}
}
