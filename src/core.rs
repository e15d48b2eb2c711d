//! Attributes, events, content trees and the render contract.
//!
//! # Examples
//!
//! ```rust
//! use tessera::core::{AttributeSet, EventName, Render};
//!
//! let mut attrs = AttributeSet::new();
//! attrs.set_event(EventName::Click, "go()");
//! assert_eq!(attrs.render(), " onclick=\"go()\"");
//! assert_eq!("text".render(3), "text");
//! ```

pub use tessera_core::*;
