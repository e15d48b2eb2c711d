//! Tessera Document - full HTML pages
//!
//! Composes element trees into a complete document: a [`Page`] owns one
//! [`Head`] (title, base, meta tags, links, scripts) and one [`Body`]
//! (content, deferred scripts, inline commands).
//!
//! ## Architecture
//!
//! - [`page`]: [`Page`] and [`ScriptPlacement`]
//! - [`head`]: [`Head`], [`Title`], [`Link`], [`Meta`], [`Script`]
//! - [`body`]: [`Body`]
//! - [`media`]: [`MediaQuery`] for stylesheet links
//! - [`config`]: [`PageConfig`], a serde description of a page
//!
//! ## Example
//!
//! ```
//! use tessera_core::Charset;
//! use tessera_document::{Page, ScriptPlacement};
//! use tessera_elements::{Container, Heading};
//!
//! let mut heading = Heading::new(1).unwrap();
//! heading.add_content("Welcome");
//!
//! let mut page = Page::new("Home");
//! page.set_charset(Charset::Utf8)
//!     .add_stylesheet("/site.css", None)
//!     .add_script(ScriptPlacement::Command, "init();", None)
//!     .add_content(heading);
//!
//! let html = page.render();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("\n\t<h1>Welcome\n\t</h1>"));
//! ```

pub mod body;
pub mod config;
pub mod head;
pub mod media;
pub mod page;

pub use body::Body;
pub use config::{PageConfig, ScriptConfig, StylesheetConfig};
pub use head::{Head, Link, Meta, Script, Title};
pub use media::MediaQuery;
pub use page::{DEFAULT_LANGUAGE, Page, ScriptPlacement, XHTML_NAMESPACE};
