//! The render contract shared by every markup node.
//!
//! A node serializes itself at a nesting `level`; the level is passed down the
//! recursion rather than stored, so the same node can be rendered at several
//! depths without being touched.

use std::fmt::Debug;

/// Serialization to an indented markup string.
pub trait Render {
	/// Appends the node's markup, indented for `level`, to `output`.
	fn render_into(&self, level: usize, output: &mut String);

	/// Returns the node's markup indented for `level`.
	fn render(&self, level: usize) -> String {
		let mut output = String::new();
		self.render_into(level, &mut output);
		output
	}
}

/// A renderable node that can be stored in a [`ContentTree`](crate::ContentTree).
///
/// Implemented for every `Render + Clone` type; there is no need to
/// implement it by hand.
pub trait Node: Render + Debug + Send + Sync {
	/// Returns an owned deep copy of the node.
	fn clone_node(&self) -> Box<dyn Node>;
}

impl<T> Node for T
where
	T: Render + Clone + Debug + Send + Sync + 'static,
{
	fn clone_node(&self) -> Box<dyn Node> {
		Box::new(self.clone())
	}
}

impl Clone for Box<dyn Node> {
	fn clone(&self) -> Self {
		self.as_ref().clone_node()
	}
}

/// Returns a deep copy of `node`.
///
/// Nodes own all of their content, so the copy shares no state with the
/// original and either can be changed without affecting the other.
pub fn deep_clone<N: Node + Clone>(node: &N) -> N {
	node.clone()
}

impl Render for String {
	fn render_into(&self, _level: usize, output: &mut String) {
		output.push_str(self);
	}
}

impl Render for &'static str {
	fn render_into(&self, _level: usize, output: &mut String) {
		output.push_str(self);
	}
}
