//! Typed HTML element builders.
//!
//! # Examples
//!
//! ```rust
//! use tessera::core::Render;
//! use tessera::elements::{Container, Span};
//!
//! let mut span = Span::new();
//! span.add_content("inline");
//! assert_eq!(span.render(0), "\n<span>inline\n</span>");
//! ```

pub use tessera_elements::*;
