//! Forms, labels and buttons.

use tessera_core::render::{push_attr, push_flag, push_opt_attr};
use tessera_core::{AttributeSet, Charset, ContentTree, LinkTarget, Render, markup_enum};

use crate::element::{impl_container, render_container};

markup_enum! {
	/// HTTP method used to submit a form
	pub enum FormMethod: "form method" {
		/// `get`
		Get => "get",
		/// `post`
		Post => "post",
	}
}

markup_enum! {
	/// Relationship between a form's document and its action target
	pub enum FormRel: "form relation" {
		/// `external`
		External => "external",
		/// `help`
		Help => "help",
		/// `license`
		License => "license",
		/// `next`
		Next => "next",
		/// `nofollow`
		NoFollow => "nofollow",
		/// `noopener`
		NoOpener => "noopener",
		/// `noreferrer`
		NoReferrer => "noreferrer",
		/// `prev`
		Prev => "prev",
		/// `search`
		Search => "search",
	}
}

markup_enum! {
	/// Encoding of submitted form data
	pub enum FormEnctype: "form enctype" {
		/// URL-encoded key/value pairs
		UrlEncoded => "application/x-www-form-urlencoded",
		/// Multipart, required for file uploads
		Multipart => "multipart/form-data",
		/// Plain text
		Text => "text/plain",
	}
}

markup_enum! {
	/// Behaviour of a `<button>`
	pub enum ButtonType: "button type" {
		/// Plain button with no default action
		Button => "button",
		/// Resets the owning form
		Reset => "reset",
		/// Submits the owning form
		Submit => "submit",
	}
}

/// `<form>`
///
/// `autocomplete` is always written, `on` unless turned off.
#[derive(Debug, Clone)]
pub struct Form {
	action: Option<String>,
	method: Option<FormMethod>,
	enctype: Option<FormEnctype>,
	target: Option<LinkTarget>,
	rel: Option<FormRel>,
	novalidate: bool,
	autocomplete: bool,
	charsets: Vec<Charset>,
	attrs: AttributeSet,
	content: ContentTree,
}

impl Default for Form {
	fn default() -> Self {
		Self {
			action: None,
			method: None,
			enctype: None,
			target: None,
			rel: None,
			novalidate: false,
			autocomplete: true,
			charsets: Vec::new(),
			attrs: AttributeSet::default(),
			content: ContentTree::default(),
		}
	}
}

impl Form {
	/// Creates a form with no action.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a form submitting to `action` with `method`.
	pub fn with_action(action: impl Into<String>, method: FormMethod) -> Self {
		Self {
			action: Some(action.into()),
			method: Some(method),
			..Self::default()
		}
	}

	/// Sets the submission URL.
	pub fn set_action(&mut self, action: impl Into<String>) -> &mut Self {
		self.action = Some(action.into());
		self
	}

	/// Sets the submission method.
	pub fn set_method(&mut self, method: FormMethod) -> &mut Self {
		self.method = Some(method);
		self
	}

	/// Sets the submission encoding.
	pub fn set_enctype(&mut self, enctype: FormEnctype) -> &mut Self {
		self.enctype = Some(enctype);
		self
	}

	/// Sets the browsing context that receives the response.
	pub fn set_target(&mut self, target: LinkTarget) -> &mut Self {
		self.target = Some(target);
		self
	}

	/// Sets the `rel` attribute.
	pub fn set_relation(&mut self, rel: FormRel) -> &mut Self {
		self.rel = Some(rel);
		self
	}

	/// Turns browser validation off (`true`) or on.
	pub fn set_novalidate(&mut self, novalidate: bool) -> &mut Self {
		self.novalidate = novalidate;
		self
	}

	/// Turns autocomplete on or off.
	pub fn set_autocomplete(&mut self, autocomplete: bool) -> &mut Self {
		self.autocomplete = autocomplete;
		self
	}

	/// Adds an accepted character set.
	pub fn add_charset(&mut self, charset: Charset) -> &mut Self {
		self.charsets.push(charset);
		self
	}
}

impl Render for Form {
	fn render_into(&self, level: usize, output: &mut String) {
		tessera_core::render::open_tag(output, level, "form");
		push_opt_attr(output, "action", self.action.as_deref());
		push_opt_attr(output, "method", self.method.map(|m| m.as_str()));
		push_opt_attr(output, "enctype", self.enctype.map(|e| e.as_str()));
		push_opt_attr(output, "target", self.target.map(|t| t.as_str()));
		push_opt_attr(output, "rel", self.rel.map(|r| r.as_str()));
		push_flag(output, "novalidate", self.novalidate);
		push_attr(output, "autocomplete", if self.autocomplete { "on" } else { "off" });
		self.attrs.render_into(output);
		if !self.charsets.is_empty() {
			let charsets: Vec<&str> = self.charsets.iter().map(Charset::as_str).collect();
			push_attr(output, "accept-charset", &charsets.join(" "));
		}
		output.push('>');
		self.content.render_into(level, output);
		tessera_core::render::close_tag(output, level, "form");
	}
}

/// `<label>` for a form control.
#[derive(Debug, Clone, Default)]
pub struct Label {
	form: Option<String>,
	input: Option<String>,
	attrs: AttributeSet,
	content: ContentTree,
}

impl Label {
	/// Creates an empty label.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a label for the control with id `input`, showing `text`.
	pub fn for_input(input: impl Into<String>, text: impl Into<String>) -> Self {
		let mut label = Self::new();
		label.input = Some(input.into());
		label.content.add(text.into());
		label
	}

	/// Sets the id of the labelled control (`for`).
	pub fn set_input(&mut self, input_id: impl Into<String>) -> &mut Self {
		self.input = Some(input_id.into());
		self
	}

	/// Sets the id of the owning form.
	pub fn set_form(&mut self, form_id: impl Into<String>) -> &mut Self {
		self.form = Some(form_id.into());
		self
	}
}

impl Render for Label {
	fn render_into(&self, level: usize, output: &mut String) {
		render_container(output, level, "label", &self.attrs, &self.content, |out| {
			push_opt_attr(out, "form", self.form.as_deref());
			push_opt_attr(out, "for", self.input.as_deref());
		});
	}
}

/// `<button>`
#[derive(Debug, Clone)]
pub struct Button {
	kind: ButtonType,
	value: Option<String>,
	autofocus: bool,
	disabled: bool,
	form: Option<String>,
	attrs: AttributeSet,
	content: ContentTree,
}

impl Button {
	/// Creates a button of the given type.
	pub fn new(kind: ButtonType) -> Self {
		Self {
			kind,
			value: None,
			autofocus: false,
			disabled: false,
			form: None,
			attrs: AttributeSet::default(),
			content: ContentTree::default(),
		}
	}

	/// Sets the submitted value.
	pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
		self.value = Some(value.into());
		self
	}

	/// Disables the button.
	pub fn disable(&mut self) -> &mut Self {
		self.disabled = true;
		self
	}

	/// Gives the button focus on page load.
	pub fn focus(&mut self) -> &mut Self {
		self.autofocus = true;
		self
	}

	/// Sets the id of the owning form.
	pub fn set_form(&mut self, form_id: impl Into<String>) -> &mut Self {
		self.form = Some(form_id.into());
		self
	}
}

impl Render for Button {
	fn render_into(&self, level: usize, output: &mut String) {
		render_container(output, level, "button", &self.attrs, &self.content, |out| {
			push_attr(out, "type", self.kind.as_str());
			push_opt_attr(out, "value", self.value.as_deref());
			push_flag(out, "autofocus", self.autofocus);
			push_flag(out, "disabled", self.disabled);
			push_opt_attr(out, "form", self.form.as_deref());
		});
	}
}

impl_container!(Form, Label, Button);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::element::Container;
	use rstest::rstest;
	use tessera_core::{GlobalAttributes, MarkupError};

	#[rstest]
	fn test_form_defaults_to_autocomplete_on() {
		assert_eq!(Form::new().render(0), "\n<form autocomplete='on'>\n</form>");
	}

	#[rstest]
	fn test_form_full_attribute_order() {
		let mut form = Form::with_action("/signup", FormMethod::Post);
		form.set_enctype(FormEnctype::Multipart)
			.set_target(LinkTarget::NewPage)
			.set_relation(FormRel::NoOpener)
			.set_novalidate(true)
			.set_autocomplete(false)
			.add_charset(Charset::Utf8)
			.add_charset(Charset::Iso8859)
			.set_id("signup");

		assert_eq!(
			form.render(0),
			"\n<form action='/signup' method='post' enctype='multipart/form-data' target='_blank' \
			 rel='noopener' novalidate='novalidate' autocomplete='off' id='signup' \
			 accept-charset='UTF-8 ISO-8859'>\n</form>"
		);
	}

	#[rstest]
	fn test_label_for_input() {
		let mut label = Label::for_input("email", "E-mail");
		label.set_form("signup");
		assert_eq!(
			label.render(1),
			"\n\t<label form='signup' for='email'>E-mail\n\t</label>"
		);
	}

	#[rstest]
	fn test_button_attributes() {
		let mut button = Button::new(ButtonType::Submit);
		button
			.set_value("go")
			.focus()
			.disable()
			.set_form("f")
			.add_class("primary")
			.add_content("Send");

		assert_eq!(
			button.render(0),
			"\n<button type='submit' value='go' autofocus='autofocus' disabled='disabled' \
			 form='f' class='primary'>Send\n</button>"
		);
	}

	#[rstest]
	#[case("get", FormMethod::Get)]
	#[case("post", FormMethod::Post)]
	fn test_form_method_parse(#[case] input: &str, #[case] expected: FormMethod) {
		assert_eq!(input.parse::<FormMethod>().unwrap(), expected);
	}

	#[rstest]
	fn test_unknown_button_type() {
		assert_eq!(
			"menu".parse::<ButtonType>(),
			Err(MarkupError::invalid_value("button type", "menu"))
		);
	}
}
