//! # Tessera
//!
//! Typed HTML element builders with indentation-aware serialization.
//!
//! Every element owns its global attributes, event handlers and child
//! content, and renders itself to an indented HTML string. Elements compose
//! into a full document through [`Page`](document::Page).
//!
//! ## Crates
//!
//! - [`core`] (`tessera-core`): attributes, events, content trees, loaders
//! - [`elements`] (`tessera-elements`): div, form, input, list, icon, ...
//! - [`document`] (`tessera-document`): page, head and body
//!
//! ## Feature Flags
//!
//! - `document` (default) - page composition and JSON page configuration
//! - `http` - fetch `http(s)://` resources with a blocking `reqwest` client
//! - `full` - all features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let mut paragraph = Paragraph::new();
//! paragraph.add_content("Hello");
//!
//! let mut div = Div::new();
//! div.add_class("greeting").add_content(paragraph);
//!
//! let mut page = Page::new("Test");
//! page.setup_mobile().add_content(div);
//!
//! let html = page.render();
//! assert!(html.contains("\n\t<div class='greeting'>\n\t\t<p>Hello\n\t\t</p>\n\t</div>"));
//! ```

pub mod core;
#[cfg(feature = "document")]
pub mod document;
pub mod elements;

pub use tessera_core::{MarkupError, Result};

/// Commonly used types and traits.
pub mod prelude {
	// Core - always available
	pub use tessera_core::{
		AttributeSet, Charset, ContentLoader, ContentTree, DefaultLoader, Direction, EventName,
		FileLoader, GlobalAttributes, LinkTarget, MarkupError, Node, Render, Result, Translate,
		deep_clone,
	};

	// Elements
	pub use tessera_elements::{
		Abbreviation, Address, Anchor, Article, Aside, Button, ButtonType, Canvas, Code, Comment,
		Container, Datalist, Div, Form, FormMethod, Heading, Icon, Iframe, Image, Input, InputType,
		Label, LineBreak, List, ListItem, ListStyle, Main, Nav, Output, Paragraph, Rule, Select,
		SelectOption, Span, Text, Textarea,
	};

	// Document feature
	#[cfg(feature = "document")]
	pub use tessera_document::{Body, Head, Link, MediaQuery, Meta, Page, PageConfig, ScriptPlacement};

	#[cfg(feature = "http")]
	pub use tessera_core::HttpLoader;
}
