//! Page, head and body composition.
//!
//! # Examples
//!
//! ```rust
//! use tessera::document::Page;
//!
//! let page = Page::new("Empty");
//! assert!(page.render().ends_with("\n<body>\n</body>\n</html>"));
//! ```

pub use tessera_document::*;
