//! DOM event-handler attributes.
//!
//! [`EventName`] is the closed set of `on*` attributes an element may carry.
//! [`EventSet`] maps each of them to an optional script (inline code or a
//! function call) and renders the set ones as ` onclick="..."`.
//!
//! ## Example
//!
//! ```
//! use tessera_core::event::{EventName, EventSet};
//!
//! let mut events = EventSet::new();
//! events.set(EventName::Click, "save()");
//! events.add("onload", "init()").unwrap();
//!
//! // Declaration order, not insertion order
//! assert_eq!(events.render(), " onload=\"init()\" onclick=\"save()\"");
//! assert!(events.add("onexplode", "boom()").is_err());
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{MarkupError, Result};

macro_rules! event_names {
	(
		$(
			$( $variant:ident => $attr:literal ),+ ;
		)+
	) => {
		/// DOM event-handler attribute names.
		///
		/// The declaration order is the render order of [`EventSet`].
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub enum EventName {
			$( $( #[allow(missing_docs)] $variant, )+ )+
		}

		impl EventName {
			/// Every event name in declaration order.
			pub const ALL: &'static [EventName] = &[ $( $( EventName::$variant, )+ )+ ];

			/// Returns the attribute name (e.g. `"onclick"`).
			pub fn as_str(&self) -> &'static str {
				match self {
					$( $( Self::$variant => $attr, )+ )+
				}
			}
		}

		impl FromStr for EventName {
			type Err = MarkupError;

			fn from_str(s: &str) -> Result<Self> {
				match s {
					$( $( $attr => Ok(Self::$variant), )+ )+
					_ => Err(MarkupError::InvalidEventName(s.to_string())),
				}
			}
		}
	};
}

event_names! {
	// Window
	AfterPrint => "onafterprint",
	BeforePrint => "onbeforeprint",
	BeforeUnload => "onbeforeunload",
	Error => "onerror",
	HashChange => "onhashchange",
	Load => "onload",
	Message => "onmessage",
	Offline => "onoffline",
	Online => "ononline",
	PageHide => "onpagehide",
	PageShow => "onpageshow",
	PopState => "onpopstate",
	Resize => "onresize",
	Storage => "onstorage",
	Unload => "onunload";
	// Form
	Blur => "onblur",
	Change => "onchange",
	ContextMenu => "oncontextmenu",
	Focus => "onfocus",
	Input => "oninput",
	Invalid => "oninvalid",
	Reset => "onreset",
	Search => "onsearch",
	Select => "onselect",
	Submit => "onsubmit";
	// Keyboard
	KeyDown => "onkeydown",
	KeyPress => "onkeypress",
	KeyUp => "onkeyup";
	// Mouse
	Click => "onclick",
	DblClick => "ondblclick",
	MouseDown => "onmousedown",
	MouseMove => "onmousemove",
	MouseOut => "onmouseout",
	MouseOver => "onmouseover",
	MouseUp => "onmouseup",
	MouseWheel => "onmousewheel",
	Wheel => "onwheel";
	// Drag and scroll
	Drag => "ondrag",
	DragEnd => "ondragend",
	DragEnter => "ondragenter",
	DragLeave => "ondragleave",
	DragOver => "ondragover",
	DragStart => "ondragstart",
	Drop => "ondrop",
	Scroll => "onscroll";
	// Clipboard
	Copy => "oncopy",
	Cut => "oncut",
	Paste => "onpaste";
	// Media
	Abort => "onabort",
	CanPlay => "oncanplay",
	CanPlayThrough => "oncanplaythrough",
	CueChange => "oncuechange",
	DurationChange => "ondurationchange",
	Emptied => "onemptied",
	Ended => "onended",
	LoadedData => "onloadeddata",
	LoadedMetadata => "onloadedmetadata",
	LoadStart => "onloadstart",
	Pause => "onpause",
	Play => "onplay",
	Playing => "onplaying",
	Progress => "onprogress",
	RateChange => "onratechange",
	Seeked => "onseeked",
	Seeking => "onseeking",
	Stalled => "onstalled",
	Suspend => "onsuspend",
	TimeUpdate => "ontimeupdate",
	VolumeChange => "onvolumechange",
	Waiting => "onwaiting";
	// Misc
	Toggle => "ontoggle";
}

impl std::fmt::Display for EventName {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Event-handler scripts keyed by [`EventName`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSet {
	handlers: BTreeMap<EventName, String>,
}

impl EventSet {
	/// Creates an empty event set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the script for a typed event, replacing any previous one.
	pub fn set(&mut self, event: EventName, script: impl Into<String>) {
		self.handlers.insert(event, script.into());
	}

	/// Sets the script for an event given by attribute name.
	///
	/// Fails with [`MarkupError::InvalidEventName`] if `name` is not an
	/// [`EventName`]; the set is left unchanged in that case.
	pub fn add(&mut self, name: &str, script: impl Into<String>) -> Result<()> {
		let event = name.parse::<EventName>().inspect_err(|_| {
			tracing::warn!(event = name, "rejected unknown event attribute");
		})?;
		self.set(event, script);
		Ok(())
	}

	/// Removes the script for an event, returning it.
	pub fn remove(&mut self, event: EventName) -> Option<String> {
		self.handlers.remove(&event)
	}

	/// Returns the script bound to an event.
	pub fn get(&self, event: EventName) -> Option<&str> {
		self.handlers.get(&event).map(String::as_str)
	}

	/// Returns the number of bound events.
	pub fn len(&self) -> usize {
		self.handlers.len()
	}

	/// Returns true if no event is bound.
	pub fn is_empty(&self) -> bool {
		self.handlers.is_empty()
	}

	/// Appends ` name="script"` for every bound event, in declaration order.
	pub fn render_into(&self, output: &mut String) {
		for (event, script) in &self.handlers {
			output.push(' ');
			output.push_str(event.as_str());
			output.push_str("=\"");
			output.push_str(script);
			output.push('"');
		}
	}

	/// Renders the bound events to an attribute string.
	pub fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}
}
