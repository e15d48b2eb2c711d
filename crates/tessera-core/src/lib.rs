//! Tessera Core - attributed markup nodes
//!
//! The building blocks shared by every Tessera element: global HTML
//! attributes, DOM event handlers, ordered child content and the indentation
//! aware render contract.
//!
//! ## Architecture
//!
//! - [`attrs`]: [`AttributeSet`] and the [`GlobalAttributes`] setter trait
//! - [`event`]: [`EventName`] and [`EventSet`]
//! - [`content`]: [`ContentTree`], the owned child list of an element
//! - [`node`]: [`Render`], [`Node`] and [`deep_clone`]
//! - [`loader`]: [`ContentLoader`] implementations for files and URLs
//! - [`values`]: closed value enumerations and the [`markup_enum!`] macro
//! - [`render`]: indentation and attribute helpers used by renderers
//!
//! ## Example
//!
//! ```
//! use tessera_core::{AttributeSet, ContentTree, Render};
//! use tessera_core::render::{close_tag, open_tag};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Section {
//!     attrs: AttributeSet,
//!     content: ContentTree,
//! }
//!
//! impl Render for Section {
//!     fn render_into(&self, level: usize, output: &mut String) {
//!         open_tag(output, level, "section");
//!         self.attrs.render_into(output);
//!         output.push('>');
//!         self.content.render_into(level, output);
//!         close_tag(output, level, "section");
//!     }
//! }
//!
//! let mut section = Section::default();
//! section.attrs.set_id("intro");
//! section.content.add("Welcome");
//!
//! assert_eq!(section.render(0), "\n<section id='intro'>Welcome\n</section>");
//! ```

pub mod attrs;
pub mod content;
pub mod error;
pub mod event;
pub mod loader;
pub mod node;
pub mod render;
pub mod values;

pub use attrs::{AttrValue, AttributeSet, GlobalAttributes};
pub use content::ContentTree;
pub use error::{MarkupError, Result};
pub use event::{EventName, EventSet};
#[cfg(feature = "http")]
pub use loader::HttpLoader;
pub use loader::{ContentLoader, DefaultLoader, FileLoader};
pub use node::{Node, Render, deep_clone};
pub use values::{Charset, Direction, LinkTarget, Translate};
