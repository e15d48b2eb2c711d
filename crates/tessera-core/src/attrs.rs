//! Global HTML attributes.
//!
//! [`AttributeSet`] holds the well-known global attributes (id, title,
//! hidden, tabindex, ...), arbitrary caller-supplied attributes, CSS classes
//! and an embedded [`EventSet`]. Elements embed one by value and expose it
//! through [`GlobalAttributes`], which provides the setters.
//!
//! ## Example
//!
//! ```
//! use tessera_core::attrs::AttributeSet;
//!
//! let mut attrs = AttributeSet::new();
//! attrs.set_id("card");
//! attrs.add_class("shadow");
//! attrs.add_attr("data-role", "panel");
//! attrs.add_event("onclick", "open()").unwrap();
//!
//! assert_eq!(
//!     attrs.render(),
//!     " id='card' data-role='panel' class='shadow' onclick=\"open()\""
//! );
//! ```

use crate::error::Result;
use crate::event::{EventName, EventSet};
use crate::render::{push_attr, push_flag, push_num_attr, push_opt_attr};
use crate::values::{Direction, Translate};

/// Value of a caller-supplied attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// String value, omitted when empty.
	Text(String),
	/// Boolean attribute: `name='name'` when true, omitted when false.
	Flag(bool),
	/// Integer value.
	Int(i64),
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Flag(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<u32> for AttrValue {
	fn from(value: u32) -> Self {
		Self::Int(value.into())
	}
}

/// Global attributes, custom attributes, classes and events of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
	id: Option<String>,
	title: Option<String>,
	hidden: bool,
	tabindex: Option<i32>,
	name: Option<String>,
	accesskey: Option<String>,
	draggable: bool,
	contenteditable: bool,
	lang: Option<String>,
	translate: Option<Translate>,
	spellcheck: bool,
	dir: Option<Direction>,
	custom: Vec<(String, AttrValue)>,
	classes: Vec<String>,
	events: EventSet,
}

impl AttributeSet {
	/// Creates an empty attribute set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `id` attribute.
	pub fn set_id(&mut self, id: impl Into<String>) {
		self.id = Some(id.into());
	}

	/// Returns the `id` attribute.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Adds or replaces a custom attribute.
	///
	/// Replacing keeps the attribute's original position.
	pub fn add_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		match self.custom.iter_mut().find(|(existing, _)| *existing == name) {
			Some((_, slot)) => *slot = value,
			None => self.custom.push((name, value)),
		}
	}

	/// Removes a custom attribute, returning its value.
	pub fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
		let index = self.custom.iter().position(|(existing, _)| existing == name)?;
		Some(self.custom.remove(index).1)
	}

	/// Returns a custom attribute.
	pub fn attr(&self, name: &str) -> Option<&AttrValue> {
		self.custom
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value)
	}

	/// Sets the `title` attribute.
	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = Some(title.into());
	}

	/// Returns the `title` attribute.
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Sets the `hidden` attribute.
	pub fn hide(&mut self) {
		self.hidden = true;
	}

	/// Clears the `hidden` attribute.
	pub fn show(&mut self) {
		self.hidden = false;
	}

	/// Returns true if the element is hidden.
	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	/// Sets the `tabindex` attribute.
	pub fn set_tabindex(&mut self, tabindex: i32) {
		self.tabindex = Some(tabindex);
	}

	/// Sets the `name` attribute.
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = Some(name.into());
	}

	/// Returns the `name` attribute.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Sets the `accesskey` attribute.
	pub fn set_accesskey(&mut self, key: impl Into<String>) {
		self.accesskey = Some(key.into());
	}

	/// Makes the element draggable.
	pub fn set_draggable(&mut self) {
		self.draggable = true;
	}

	/// Turns `contenteditable` on or off.
	pub fn set_editable(&mut self, editable: bool) {
		self.contenteditable = editable;
	}

	/// Sets the `lang` attribute.
	pub fn set_language(&mut self, lang: impl Into<String>) {
		self.lang = Some(lang.into());
	}

	/// Sets the `translate` attribute.
	pub fn to_translate(&mut self, translate: Translate) {
		self.translate = Some(translate);
	}

	/// Turns `spellcheck` on or off.
	pub fn to_spellcheck(&mut self, spellcheck: bool) {
		self.spellcheck = spellcheck;
	}

	/// Sets the `dir` attribute.
	pub fn set_dir(&mut self, dir: Direction) {
		self.dir = Some(dir);
	}

	/// Appends a CSS class. Duplicates are kept.
	pub fn add_class(&mut self, class: impl Into<String>) {
		self.classes.push(class.into());
	}

	/// Removes every occurrence of a CSS class.
	pub fn remove_class(&mut self, class: &str) {
		self.classes.retain(|existing| existing != class);
	}

	/// Returns the CSS classes in insertion order.
	pub fn classes(&self) -> &[String] {
		&self.classes
	}

	/// Binds a script to an event given by attribute name.
	pub fn add_event(&mut self, name: &str, script: impl Into<String>) -> Result<()> {
		self.events.add(name, script)
	}

	/// Binds a script to a typed event.
	pub fn set_event(&mut self, event: EventName, script: impl Into<String>) {
		self.events.set(event, script);
	}

	/// Unbinds an event.
	pub fn remove_event(&mut self, event: EventName) -> Option<String> {
		self.events.remove(event)
	}

	/// Returns the embedded event set.
	pub fn events(&self) -> &EventSet {
		&self.events
	}

	/// Returns the embedded event set mutably.
	pub fn events_mut(&mut self) -> &mut EventSet {
		&mut self.events
	}

	/// Appends every present attribute in the fixed render order.
	pub fn render_into(&self, output: &mut String) {
		self.render_into_with_classes(output, &[]);
	}

	/// Like [`render_into`](Self::render_into), with `leading` classes placed
	/// before the set's own classes in the single `class` attribute.
	pub fn render_into_with_classes(&self, output: &mut String, leading: &[&str]) {
		push_opt_attr(output, "id", self.id.as_deref());
		push_opt_attr(output, "title", self.title.as_deref());
		push_flag(output, "hidden", self.hidden);
		push_num_attr(output, "tabindex", self.tabindex);
		push_opt_attr(output, "name", self.name.as_deref());
		push_opt_attr(output, "accesskey", self.accesskey.as_deref());
		if self.draggable {
			push_attr(output, "draggable", "true");
		}
		if self.contenteditable {
			push_attr(output, "contenteditable", "true");
		}
		push_opt_attr(output, "lang", self.lang.as_deref());
		push_opt_attr(output, "translate", self.translate.map(|t| t.as_str()));
		if self.spellcheck {
			push_attr(output, "spellcheck", "true");
		}
		push_opt_attr(output, "dir", self.dir.map(|d| d.as_str()));

		for (name, value) in &self.custom {
			match value {
				AttrValue::Text(text) => push_attr(output, name, text),
				AttrValue::Flag(on) => push_flag(output, name, *on),
				AttrValue::Int(number) => push_attr(output, name, &number.to_string()),
			}
		}

		let classes: Vec<&str> = leading
			.iter()
			.copied()
			.chain(self.classes.iter().map(String::as_str))
			.filter(|class| !class.is_empty())
			.collect();
		if !classes.is_empty() {
			push_attr(output, "class", &classes.join(" "));
		}

		self.events.render_into(output);
	}

	/// Renders every present attribute to a string.
	pub fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}
}

/// Global attribute setters for any element embedding an [`AttributeSet`].
///
/// Implementors only provide the two accessors; every setter is provided and
/// returns `&mut Self` so calls can be chained.
///
/// ```
/// use tessera_core::attrs::{AttributeSet, GlobalAttributes};
///
/// #[derive(Default)]
/// struct Badge {
///     attrs: AttributeSet,
/// }
///
/// impl GlobalAttributes for Badge {
///     fn attributes(&self) -> &AttributeSet {
///         &self.attrs
///     }
///     fn attributes_mut(&mut self) -> &mut AttributeSet {
///         &mut self.attrs
///     }
/// }
///
/// let mut badge = Badge::default();
/// badge.set_id("new").add_class("badge").hide();
/// assert_eq!(badge.attributes().render(), " id='new' hidden='hidden' class='badge'");
/// ```
pub trait GlobalAttributes {
	/// Returns the element's attribute set.
	fn attributes(&self) -> &AttributeSet;

	/// Returns the element's attribute set mutably.
	fn attributes_mut(&mut self) -> &mut AttributeSet;

	/// Sets the `id` attribute.
	fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
		self.attributes_mut().set_id(id);
		self
	}

	/// Returns the `id` attribute.
	fn id(&self) -> Option<&str> {
		self.attributes().id()
	}

	/// Adds or replaces a custom attribute.
	fn add_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
		self.attributes_mut().add_attr(name, value);
		self
	}

	/// Removes a custom attribute.
	fn remove_attr(&mut self, name: &str) -> &mut Self {
		self.attributes_mut().remove_attr(name);
		self
	}

	/// Sets the `title` attribute.
	fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
		self.attributes_mut().set_title(title);
		self
	}

	/// Sets the `hidden` attribute.
	fn hide(&mut self) -> &mut Self {
		self.attributes_mut().hide();
		self
	}

	/// Clears the `hidden` attribute.
	fn show(&mut self) -> &mut Self {
		self.attributes_mut().show();
		self
	}

	/// Returns true if the element is hidden.
	fn is_hidden(&self) -> bool {
		self.attributes().is_hidden()
	}

	/// Sets the `tabindex` attribute.
	fn set_tabindex(&mut self, tabindex: i32) -> &mut Self {
		self.attributes_mut().set_tabindex(tabindex);
		self
	}

	/// Sets the `name` attribute.
	fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.attributes_mut().set_name(name);
		self
	}

	/// Sets the `accesskey` attribute.
	fn set_accesskey(&mut self, key: impl Into<String>) -> &mut Self {
		self.attributes_mut().set_accesskey(key);
		self
	}

	/// Makes the element draggable.
	fn set_draggable(&mut self) -> &mut Self {
		self.attributes_mut().set_draggable();
		self
	}

	/// Turns `contenteditable` on or off.
	fn set_editable(&mut self, editable: bool) -> &mut Self {
		self.attributes_mut().set_editable(editable);
		self
	}

	/// Sets the `lang` attribute.
	fn set_language(&mut self, lang: impl Into<String>) -> &mut Self {
		self.attributes_mut().set_language(lang);
		self
	}

	/// Sets the `translate` attribute.
	fn to_translate(&mut self, translate: Translate) -> &mut Self {
		self.attributes_mut().to_translate(translate);
		self
	}

	/// Turns `spellcheck` on or off.
	fn to_spellcheck(&mut self, spellcheck: bool) -> &mut Self {
		self.attributes_mut().to_spellcheck(spellcheck);
		self
	}

	/// Sets the `dir` attribute.
	fn set_dir(&mut self, dir: Direction) -> &mut Self {
		self.attributes_mut().set_dir(dir);
		self
	}

	/// Appends a CSS class.
	fn add_class(&mut self, class: impl Into<String>) -> &mut Self {
		self.attributes_mut().add_class(class);
		self
	}

	/// Removes a CSS class.
	fn remove_class(&mut self, class: &str) -> &mut Self {
		self.attributes_mut().remove_class(class);
		self
	}

	/// Binds a script to an event given by attribute name.
	///
	/// Fails with `InvalidEventName` for names outside [`EventName`].
	fn add_event(&mut self, name: &str, script: impl Into<String>) -> Result<&mut Self> {
		self.attributes_mut().add_event(name, script)?;
		Ok(self)
	}

	/// Binds a script to a typed event.
	fn set_event(&mut self, event: EventName, script: impl Into<String>) -> &mut Self {
		self.attributes_mut().set_event(event, script);
		self
	}

	/// Unbinds an event.
	fn remove_event(&mut self, event: EventName) -> &mut Self {
		self.attributes_mut().remove_event(event);
		self
	}
}
