//! Content tree property tests
//!
//! Property-based tests for child ordering and render idempotence.

use proptest::prelude::*;
use tessera_core::render::{close_tag, open_tag};
use tessera_core::{AttributeSet, ContentTree, EventName, Render, deep_clone};

#[derive(Debug, Clone, Default)]
struct Block {
	attrs: AttributeSet,
	content: ContentTree,
}

impl Render for Block {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "div");
		self.attrs.render_into(output);
		output.push('>');
		self.content.render_into(level, output);
		close_tag(output, level, "div");
	}
}

proptest! {
	/// Children are rendered in insertion order with nothing in between.
	#[test]
	fn prop_children_render_in_order(texts in prop::collection::vec("[a-z]{1,8}", 0..12)) {
		let mut content = ContentTree::new();
		for text in &texts {
			content.add(text.clone());
		}

		prop_assert_eq!(content.len(), texts.len());
		prop_assert_eq!(content.render(0), texts.concat());
	}

	/// Rendering twice yields the same string.
	#[test]
	fn prop_render_is_idempotent(
		id in "[a-z]{1,10}",
		classes in prop::collection::vec("[a-z]{1,6}", 0..4),
		level in 0usize..6,
	) {
		let mut block = Block::default();
		block.attrs.set_id(id);
		for class in classes {
			block.attrs.add_class(class);
		}
		block.attrs.set_event(EventName::Click, "go()");
		block.content.add("body");

		prop_assert_eq!(block.render(level), block.render(level));
	}

	/// Nested blocks indent one tab per level.
	#[test]
	fn prop_nesting_indents_one_tab_per_level(depth in 1usize..8) {
		let mut block = Block::default();
		for _ in 1..depth {
			let mut outer = Block::default();
			outer.content.add(block);
			block = outer;
		}

		let rendered = block.render(0);
		let deepest = "\t".repeat(depth - 1);
		let expected_open = format!("\n{}<div>", deepest);
		prop_assert!(rendered.contains(&expected_open));
		prop_assert_eq!(rendered.matches("<div>").count(), depth);
	}

	/// A deep clone renders identically and is unaffected by later edits.
	#[test]
	fn prop_deep_clone_is_independent(extra in "[a-z]{1,8}") {
		let mut original = Block::default();
		original.content.add("kept");
		let snapshot = original.render(1);

		let copy = deep_clone(&original);
		original.content.add(extra);

		prop_assert_eq!(copy.render(1), snapshot);
	}
}
