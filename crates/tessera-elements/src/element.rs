//! Plumbing shared by element types.
//!
//! [`Container`] gives every element that owns a [`ContentTree`] the
//! `add_content` / `add_clone` operations. The `impl_attributes!` and
//! `impl_container!` macros wire an element's `attrs` and `content` fields to
//! [`GlobalAttributes`](tessera_core::GlobalAttributes) and [`Container`].

use tessera_core::render::{close_tag, open_tag};
use tessera_core::{AttributeSet, ContentTree, Node};

/// An element with child content.
pub trait Container {
	/// Returns the element's children.
	fn content(&self) -> &ContentTree;

	/// Returns the element's children mutably.
	fn content_mut(&mut self) -> &mut ContentTree;

	/// Appends a child node, taking ownership of it.
	fn add_content(&mut self, node: impl Node + 'static) -> &mut Self {
		self.content_mut().add(node);
		self
	}

	/// Appends a deep copy of `node`; later changes to either side stay local.
	fn add_clone(&mut self, node: &dyn Node) -> &mut Self {
		self.content_mut().add_clone(node);
		self
	}
}

/// Implements `GlobalAttributes` through an `attrs: AttributeSet` field.
macro_rules! impl_attributes {
	($($ty:ty),+ $(,)?) => {
		$(
			impl ::tessera_core::GlobalAttributes for $ty {
				fn attributes(&self) -> &::tessera_core::AttributeSet {
					&self.attrs
				}

				fn attributes_mut(&mut self) -> &mut ::tessera_core::AttributeSet {
					&mut self.attrs
				}
			}
		)+
	};
}

/// Implements `GlobalAttributes` and `Container` through `attrs` and
/// `content` fields.
macro_rules! impl_container {
	($($ty:ty),+ $(,)?) => {
		$(
			$crate::element::impl_attributes!($ty);

			impl $crate::element::Container for $ty {
				fn content(&self) -> &::tessera_core::ContentTree {
					&self.content
				}

				fn content_mut(&mut self) -> &mut ::tessera_core::ContentTree {
					&mut self.content
				}
			}
		)+
	};
}

pub(crate) use impl_attributes;
pub(crate) use impl_container;

/// Writes `\n<indent><tag` + own attributes + global attributes + `>`,
/// the children one level deeper, then `\n<indent></tag>`.
pub(crate) fn render_container(
	output: &mut String,
	level: usize,
	tag: &str,
	attrs: &AttributeSet,
	content: &ContentTree,
	own_attrs: impl FnOnce(&mut String),
) {
	open_tag(output, level, tag);
	own_attrs(output);
	attrs.render_into(output);
	output.push('>');
	content.render_into(level, output);
	close_tag(output, level, tag);
}
