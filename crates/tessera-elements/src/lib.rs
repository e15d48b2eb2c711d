//! Tessera Elements - typed HTML element builders
//!
//! Every element owns its attributes and children and renders itself through
//! [`Render`](tessera_core::Render). Containers open on their own line,
//! indented one tab per level, and render their children one level deeper:
//!
//! ```text
//! "\n" + tabs(level) + "<tag" + own attributes + global attributes + ">"
//!      + children at level + 1
//!      + "\n" + tabs(level) + "</tag>"
//! ```
//!
//! ## Example
//!
//! ```
//! use tessera_core::{GlobalAttributes, Render};
//! use tessera_elements::{Container, Div, Paragraph};
//!
//! let mut paragraph = Paragraph::new();
//! paragraph.add_content("Hello");
//!
//! let mut div = Div::new();
//! div.set_id("greeting").add_content(paragraph);
//!
//! assert_eq!(
//!     div.render(0),
//!     "\n<div id='greeting'>\n\t<p>Hello\n\t</p>\n</div>"
//! );
//! ```

pub mod element;

pub mod anchor;
pub mod comment;
pub mod container;
pub mod form;
pub mod icon;
pub mod image;
pub mod inline;
pub mod input;
pub mod list;
pub mod select;
pub mod text;
pub mod textarea;

pub use anchor::Anchor;
pub use comment::Comment;
pub use container::{
	Address, Article, Aside, Canvas, Div, Heading, Iframe, Main, Nav, Paragraph, Span,
};
pub use element::Container;
pub use form::{Button, ButtonType, Form, FormEnctype, FormMethod, FormRel, Label};
pub use icon::{Icon, IconAnimation, IconRotation, IconSize, IconStyle};
pub use image::Image;
pub use inline::{Abbreviation, LineBreak, Rule};
pub use input::{Datalist, FileFormat, Input, InputType, Output};
pub use list::{ItemKind, List, ListItem, ListStyle};
pub use select::{Select, SelectOption};
pub use text::{Code, Text};
pub use textarea::{Textarea, WrapMode};
